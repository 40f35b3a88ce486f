use crate::{
    domain::requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    async fn find_all(&self, req: &FindAllCategories) -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, RepositoryError>;
    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError>;
    async fn update(
        &self,
        id: &str,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
