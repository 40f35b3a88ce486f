use crate::model::Cashier;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public cashier projection. The password hash never leaves the model
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashierResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub place_of_birth: String,
    pub date_of_birth: NaiveDate,
    pub gender_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Cashier> for CashierResponse {
    fn from(value: Cashier) -> Self {
        CashierResponse {
            id: value.id,
            username: value.username,
            email: value.email,
            contact_number: value.contact_number,
            address: value.address,
            place_of_birth: value.place_of_birth,
            date_of_birth: value.date_of_birth,
            gender_id: value.gender_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
