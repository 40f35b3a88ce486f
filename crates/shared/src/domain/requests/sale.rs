use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Proposed sale as submitted by the storefront. Any client-supplied total
/// is not part of this struct and is therefore discarded on deserialization;
/// the stored total is always recomputed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    #[validate(length(equal = 8))]
    pub customer_id: Option<String>,

    #[validate(length(equal = 8))]
    pub cashier_id: Option<String>,

    #[validate(length(equal = 1))]
    pub method_id: Option<String>,

    pub order_date: Option<DateTime<Utc>>,

    #[validate(length(max = 25))]
    pub bank_trans: Option<String>,

    #[validate(length(max = 20))]
    pub receipt_number: Option<String>,

    #[validate(length(max = 25))]
    pub tracking_number: Option<String>,

    #[validate(length(min = 1), nested)]
    pub items: Vec<CreateSaleItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleItemRequest {
    #[validate(range(min = 1))]
    pub product_id: i32,

    #[validate(range(min = 1))]
    pub qty: i32,

    #[validate(range(min = 0))]
    pub price: i64,
}

/// Normalized sale ready to persist: party defaults resolved and the total
/// already computed by the service. Written as one atomic unit.
#[derive(Debug, Clone)]
pub struct CreateSaleRecordRequest {
    pub customer_id: Option<String>,
    pub cashier_id: String,
    pub method_id: String,
    pub order_date: DateTime<Utc>,
    pub bank_trans: Option<String>,
    pub receipt_number: Option<String>,
    pub tracking_number: Option<String>,
    pub total: i64,
    pub items: Vec<SaleItemRecord>,
}

#[derive(Debug, Clone, Copy)]
pub struct SaleItemRecord {
    pub product_id: i32,
    pub qty: i32,
    pub price: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FindAllSales {
    /// Exact customer id filter.
    pub customer_id: Option<String>,
    /// Free-text match on receipt/tracking number, or a numeric order id.
    pub q: Option<String>,
}
