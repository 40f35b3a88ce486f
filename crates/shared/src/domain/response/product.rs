use crate::{
    domain::response::category::CategoryResponse,
    model::Product,
    utils::{product_image_url, slugify},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub stock: Option<i32>,
    pub category: CategoryResponse,
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        let slug = slugify(&value.name);
        let image_url = product_image_url(value.product_id, &value.category_id);
        let category = CategoryResponse::from_parts(&value.category_id, &value.category_name);

        ProductResponse {
            id: value.product_id,
            name: value.name,
            slug,
            price: value.price,
            stock: value.stock,
            category,
            image_url,
        }
    }
}

/// A ranked product annotated with its aggregate sold quantity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BestSellingProductResponse {
    #[serde(flatten)]
    pub product: ProductResponse,
    pub sold_qty: i64,
}

impl BestSellingProductResponse {
    pub fn new(product: Product, sold_qty: i64) -> Self {
        Self {
            product: ProductResponse::from(product),
            sold_qty,
        }
    }
}
