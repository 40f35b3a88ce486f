use crate::model::Customer;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub place_of_birth: String,
    pub date_of_birth: NaiveDate,
    pub gender_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        CustomerResponse {
            id: value.id,
            name: value.name,
            email: value.email,
            contact_number: value.contact_number,
            address: value.address,
            place_of_birth: value.place_of_birth,
            date_of_birth: value.date_of_birth,
            gender_id: value.gender_id,
            created_at: value.created_at,
            created_by: value.created_by,
            updated_at: value.updated_at,
            updated_by: value.updated_by,
        }
    }
}
