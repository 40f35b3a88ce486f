use crate::{
    domain::requests::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest},
    errors::RepositoryError,
    model::Customer,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerRepository = Arc<dyn CustomerRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerRepositoryTrait: Send + Sync {
    async fn find_all(&self, req: &FindAllCustomers) -> Result<Vec<Customer>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, RepositoryError>;
    async fn create(&self, req: &CreateCustomerRequest) -> Result<Customer, RepositoryError>;
    async fn update(
        &self,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
