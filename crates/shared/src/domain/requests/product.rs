use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 2, max = 40))]
    pub name: String,

    #[validate(range(min = 0))]
    pub price: i64,

    #[validate(length(equal = 2))]
    pub category_id: String,

    #[validate(range(min = 0))]
    pub stock: Option<i32>,

    #[validate(length(min = 2, max = 40))]
    pub created_by: Option<String>,

    #[validate(length(min = 2, max = 40))]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 2, max = 40))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub price: Option<i64>,

    #[validate(length(equal = 2))]
    pub category_id: Option<String>,

    #[validate(range(min = 0))]
    pub stock: Option<i32>,

    #[validate(length(min = 2, max = 40))]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FindAllProducts {
    /// Case-insensitive name search.
    pub q: Option<String>,
    pub category_id: Option<String>,
    /// "1" or "true" switches the listing to the best-selling ranking.
    pub best_selling: Option<String>,
    pub limit: Option<i64>,
}

impl FindAllProducts {
    pub fn wants_best_selling(&self) -> bool {
        matches!(self.best_selling.as_deref(), Some("1") | Some("true"))
    }
}
