use crate::{
    domain::response::{cashier::CashierResponse, customer::CustomerResponse},
    model::{Cashier, Customer, PaymentMethod, Sale, SaleItemDetail},
    utils::{product_image_url, slugify},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentMethodResponse {
    pub id: String,
    pub method: String,
}

impl From<PaymentMethod> for PaymentMethodResponse {
    fn from(value: PaymentMethod) -> Self {
        PaymentMethodResponse {
            id: value.id,
            method: value.method,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemResponse {
    pub product_id: i32,
    pub qty: i32,
    /// Unit price at the time of sale.
    pub price: i64,
    pub product_name: String,
    pub product_slug: String,
    pub image_url: String,
}

impl From<SaleItemDetail> for SaleItemResponse {
    fn from(value: SaleItemDetail) -> Self {
        let product_slug = slugify(&value.product_name);
        let image_url = product_image_url(value.product_id, &value.category_id);
        SaleItemResponse {
            product_id: value.product_id,
            qty: value.qty,
            price: value.price,
            product_name: value.product_name,
            product_slug,
            image_url,
        }
    }
}

/// Fully hydrated sale, returned from creation and lookups.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub customer: Option<CustomerResponse>,
    pub cashier: CashierResponse,
    pub method: PaymentMethodResponse,
    pub bank_trans: Option<String>,
    pub receipt_number: Option<String>,
    pub tracking_number: Option<String>,
    pub total: i64,
    pub items: Vec<SaleItemResponse>,
}

impl SaleResponse {
    pub fn from_parts(
        sale: Sale,
        customer: Option<Customer>,
        cashier: Cashier,
        method: PaymentMethod,
        items: Vec<SaleItemDetail>,
    ) -> Self {
        SaleResponse {
            id: sale.order_id,
            order_date: sale.order_date,
            customer: customer.map(CustomerResponse::from),
            cashier: CashierResponse::from(cashier),
            method: PaymentMethodResponse::from(method),
            bank_trans: sale.bank_trans,
            receipt_number: sale.receipt_number,
            tracking_number: sale.tracking_number,
            total: sale.total,
            items: items.into_iter().map(SaleItemResponse::from).collect(),
        }
    }
}
