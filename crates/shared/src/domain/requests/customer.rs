use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(equal = 8))]
    pub id: String,

    #[validate(length(min = 2, max = 45))]
    pub name: String,

    #[validate(length(min = 3, max = 100))]
    pub address: String,

    #[validate(length(min = 2, max = 25))]
    pub place_of_birth: String,

    pub date_of_birth: NaiveDate,

    #[validate(length(min = 6, max = 14))]
    pub contact_number: String,

    #[validate(email, length(max = 40))]
    pub email: String,

    #[validate(length(equal = 1))]
    pub gender_id: String,

    #[validate(length(max = 35))]
    pub created_by: Option<String>,

    #[validate(length(max = 35))]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 2, max = 45))]
    pub name: Option<String>,

    #[validate(length(min = 3, max = 100))]
    pub address: Option<String>,

    #[validate(length(min = 2, max = 25))]
    pub place_of_birth: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(min = 6, max = 14))]
    pub contact_number: Option<String>,

    #[validate(email, length(max = 40))]
    pub email: Option<String>,

    #[validate(length(equal = 1))]
    pub gender_id: Option<String>,

    #[validate(length(max = 35))]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct FindAllCustomers {
    /// Matches against name, email, contact number, or id.
    pub q: Option<String>,
}
