use crate::{errors::RepositoryError, model::PaymentMethod};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentMethodRepository = Arc<dyn PaymentMethodRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PaymentMethodRepositoryTrait: Send + Sync {
    async fn find_all(&self) -> Result<Vec<PaymentMethod>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<PaymentMethod>, RepositoryError>;
}
