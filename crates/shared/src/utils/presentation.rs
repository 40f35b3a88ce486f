//! Presentation-only derivations (slugs, stock photo URLs). Slugs are never
//! stored; they are recomputed from names at response-mapping time, so this
//! module can be swapped out without touching any service or repository.

/// Lowercased, ascii-dashed slug of a display name.
///
/// Mirrors the frontend's expectation: quotes removed, any other
/// non-alphanumeric run collapsed into a single dash, no leading or
/// trailing dashes.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.trim().chars() {
        if matches!(c, '\'' | '"' | '`') {
            continue;
        }
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(lower);
        } else {
            pending_dash = true;
        }
    }

    out
}

/// Deterministic stock-photo URL for a product. The `sig` parameter keeps
/// the image stable per product id.
pub fn product_image_url(product_id: i32, category_id: &str) -> String {
    let query = if category_id == "AT" {
        "stationery"
    } else {
        "product"
    };
    format!("https://source.unsplash.com/featured/600x450?{query}&sig={product_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Kenko Pulpen Gel 2 Pcs"), "kenko-pulpen-gel-2-pcs");
        assert_eq!(slugify("  Tip-Ex / Correction! "), "tip-ex-correction");
        assert_eq!(slugify("O'Brien\"s Pen"), "obriens-pen");
    }

    #[test]
    fn slugify_strips_edge_dashes() {
        assert_eq!(slugify("--abc--"), "abc");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn image_url_keys_off_category() {
        assert!(product_image_url(7, "AT").contains("stationery"));
        assert!(product_image_url(7, "PL").contains("product"));
    }
}
