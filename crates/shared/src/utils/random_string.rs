use anyhow::Result;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};

const DIGITS: &[u8] = b"0123456789";

/// Fixed-length numeric identifier, used for generated cashier ids.
pub fn generate_digit_id(length: usize) -> Result<String> {
    let mut seed = [0u8; 32];
    OsRng.try_fill_bytes(&mut seed)?;
    let mut rng = StdRng::from_seed(seed);

    let s = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..DIGITS.len());
            DIGITS[idx] as char
        })
        .collect();

    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length_of_digits() {
        let id = generate_digit_id(8).unwrap();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }
}
