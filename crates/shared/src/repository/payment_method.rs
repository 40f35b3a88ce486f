use crate::{
    abstract_trait::PaymentMethodRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::PaymentMethod,
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct PaymentMethodRepository {
    db: ConnectionPool,
}

impl PaymentMethodRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentMethodRepositoryTrait for PaymentMethodRepository {
    async fn find_all(&self) -> Result<Vec<PaymentMethod>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, PaymentMethod>(
            r#"
            SELECT id, method FROM payment_methods ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PaymentMethod>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, PaymentMethod>(
            r#"
            SELECT id, method FROM payment_methods WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }
}
