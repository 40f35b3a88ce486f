use crate::{
    abstract_trait::SaleCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateSaleRecordRequest,
    errors::RepositoryError,
    model::Sale,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct SaleCommandRepository {
    db: ConnectionPool,
}

impl SaleCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for SaleCommandRepository {
    async fn create_sale(&self, record: &CreateSaleRecordRequest) -> Result<Sale, RepositoryError> {
        // Header and lines are one unit: any failure before commit rolls
        // the whole sale back, so no partial order is ever observable.
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales
                (order_date, customer_id, cashier_id, method_id,
                 bank_trans, receipt_number, tracking_number, total)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING order_id, order_date, customer_id, cashier_id, method_id,
                      bank_trans, receipt_number, tracking_number, total
            "#,
        )
        .bind(record.order_date)
        .bind(record.customer_id.as_deref())
        .bind(&record.cashier_id)
        .bind(&record.method_id)
        .bind(record.bank_trans.as_deref())
        .bind(record.receipt_number.as_deref())
        .bind(record.tracking_number.as_deref())
        .bind(record.total)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert sale header: {:?}", e);
            RepositoryError::from(e)
        })?;

        for item in &record.items {
            sqlx::query(
                r#"
                INSERT INTO sale_items (order_id, product_id, qty, price)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(sale.order_id)
            .bind(item.product_id)
            .bind(item.qty)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to insert sale line (order {}, product {}): {:?}",
                    sale.order_id, item.product_id, e
                );
                RepositoryError::from(e)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created sale ID {} with {} line(s), total {}",
            sale.order_id,
            record.items.len(),
            sale.total
        );
        Ok(sale)
    }

    async fn delete_sale(&self, order_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // sale_items go with the header via ON DELETE CASCADE.
        let result = sqlx::query(
            r#"
            DELETE FROM sales WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete sale {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted sale ID {}", order_id);
        Ok(())
    }
}
