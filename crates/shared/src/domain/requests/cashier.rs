use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct FindAllCashiers {
    /// Matches against id, username, email, or contact number.
    pub q: Option<String>,
}

/// Normalized cashier row produced by the register flow; the password is
/// already hashed by the time it reaches the repository.
#[derive(Debug, Clone)]
pub struct RegisterCashierRecord {
    pub id: String,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub place_of_birth: String,
    pub date_of_birth: NaiveDate,
    pub gender_id: String,
    pub password_hash: String,
}
