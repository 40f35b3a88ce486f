use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub price: i64,
    pub stock: Option<i32>,
    pub category_id: String,
    pub category_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// One row of the sale-line aggregation: a product id paired with the summed
/// quantity sold across all recorded sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct ProductSoldTotal {
    pub product_id: i32,
    pub sold_qty: i64,
}
