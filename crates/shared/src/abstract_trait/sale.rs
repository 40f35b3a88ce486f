use crate::{
    domain::requests::{CreateSaleRecordRequest, FindAllSales},
    errors::RepositoryError,
    model::{ProductSoldTotal, Sale, SaleItemDetail},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSaleCommandRepository = Arc<dyn SaleCommandRepositoryTrait + Send + Sync>;
pub type DynSaleQueryRepository = Arc<dyn SaleQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SaleCommandRepositoryTrait: Send + Sync {
    /// Inserts the header and every line inside a single transaction.
    /// Any failure rolls the whole sale back.
    async fn create_sale(&self, record: &CreateSaleRecordRequest) -> Result<Sale, RepositoryError>;

    /// Removes the header; lines go with it via the FK cascade.
    async fn delete_sale(&self, order_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait SaleQueryRepositoryTrait: Send + Sync {
    async fn find_all(&self, req: &FindAllSales) -> Result<Vec<Sale>, RepositoryError>;
    async fn find_by_id(&self, order_id: i32) -> Result<Option<Sale>, RepositoryError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<SaleItemDetail>, RepositoryError>;

    /// Per-product summed sold quantity across all sales, ranked by
    /// quantity descending with ascending product id as the tiebreak.
    async fn sold_totals(&self) -> Result<Vec<ProductSoldTotal>, RepositoryError>;
}
