use crate::{model::Category, utils::slugify};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        let slug = slugify(&value.name);
        CategoryResponse {
            id: value.id,
            name: value.name,
            slug,
        }
    }
}

impl CategoryResponse {
    pub fn from_parts(id: &str, name: &str) -> Self {
        CategoryResponse {
            id: id.to_string(),
            name: name.to_string(),
            slug: slugify(name),
        }
    }
}
