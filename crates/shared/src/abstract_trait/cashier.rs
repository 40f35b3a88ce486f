use crate::{
    domain::requests::{FindAllCashiers, RegisterCashierRecord},
    errors::RepositoryError,
    model::Cashier,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCashierRepository = Arc<dyn CashierRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CashierRepositoryTrait: Send + Sync {
    async fn find_all(&self, req: &FindAllCashiers) -> Result<Vec<Cashier>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Cashier>, RepositoryError>;

    /// Lookup by username or email, used by login and register.
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Cashier>, RepositoryError>;

    async fn create(&self, record: &RegisterCashierRecord) -> Result<Cashier, RepositoryError>;
}
