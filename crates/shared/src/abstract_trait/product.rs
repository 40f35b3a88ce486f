use crate::{
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait: Send + Sync {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;

    /// Resolves a set of ids, applying the optional category/name filters.
    /// Ids that no longer exist are simply absent from the result.
    async fn find_by_ids(
        &self,
        ids: &[i32],
        category_id: Option<&str>,
        q: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError>;

    /// Most-recently-created products, for the cold-start fallback.
    async fn find_latest(&self, limit: Option<i64>) -> Result<Vec<Product>, RepositoryError>;

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
