use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Sale header. Line items live in `sale_items` and are only ever written
/// together with their header, inside one transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub order_id: i32,
    pub order_date: DateTime<Utc>,
    pub customer_id: Option<String>,
    pub cashier_id: String,
    pub method_id: String,
    pub bank_trans: Option<String>,
    pub receipt_number: Option<String>,
    pub tracking_number: Option<String>,
    pub total: i64,
}

/// A sale line joined with the product it references, for hydrated
/// responses. Raw lines are never read on their own.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SaleItemDetail {
    pub order_id: i32,
    pub product_id: i32,
    pub qty: i32,
    /// Unit price captured at the time of sale, independent of the
    /// product's current price.
    pub price: i64,
    pub product_name: String,
    pub product_price: i64,
    pub category_id: String,
}
