use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cashier {
    pub id: String,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub place_of_birth: String,
    pub date_of_birth: NaiveDate,
    pub gender_id: String,
    /// Bcrypt hash. Never serialized into any public projection.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
