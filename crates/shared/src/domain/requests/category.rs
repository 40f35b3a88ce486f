use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(equal = 2))]
    pub id: String,

    #[validate(length(min = 2, max = 20))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(equal = 2))]
    pub id: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct FindAllCategories {
    /// Matches against category id or name.
    pub q: Option<String>,
}
