use crate::{
    abstract_trait::CashierRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{FindAllCashiers, RegisterCashierRecord},
    errors::RepositoryError,
    model::Cashier,
};
use async_trait::async_trait;
use tracing::{error, info};

const CASHIER_COLUMNS: &str = r#"
    id, username, email, contact_number, address, place_of_birth,
    date_of_birth, gender_id, password, created_at, updated_at
"#;

#[derive(Clone)]
pub struct CashierRepository {
    db: ConnectionPool,
}

impl CashierRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CashierRepositoryTrait for CashierRepository {
    async fn find_all(&self, req: &FindAllCashiers) -> Result<Vec<Cashier>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let search = req.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

        let sql = format!(
            r#"
            SELECT {CASHIER_COLUMNS}
            FROM cashiers
            WHERE ($1::TEXT IS NULL
                   OR id ILIKE '%' || $1 || '%'
                   OR username ILIKE '%' || $1 || '%'
                   OR email ILIKE '%' || $1 || '%'
                   OR contact_number ILIKE '%' || $1 || '%')
            ORDER BY id DESC
            "#
        );

        let rows = sqlx::query_as::<_, Cashier>(&sql)
            .bind(search)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch cashiers: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Cashier>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            SELECT {CASHIER_COLUMNS} FROM cashiers WHERE id = $1
            "#
        );

        let row = sqlx::query_as::<_, Cashier>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Cashier>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            SELECT {CASHIER_COLUMNS}
            FROM cashiers
            WHERE username = $1 OR email = $1
            "#
        );

        let row = sqlx::query_as::<_, Cashier>(&sql)
            .bind(identifier)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn create(&self, record: &RegisterCashierRecord) -> Result<Cashier, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO cashiers
                (id, username, email, contact_number, address, place_of_birth,
                 date_of_birth, gender_id, password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now(), now())
            RETURNING {CASHIER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, Cashier>(&sql)
            .bind(&record.id)
            .bind(&record.username)
            .bind(&record.email)
            .bind(&record.contact_number)
            .bind(&record.address)
            .bind(&record.place_of_birth)
            .bind(record.date_of_birth)
            .bind(&record.gender_id)
            .bind(&record.password_hash)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to create cashier {}: {:?}", record.username, e);
                RepositoryError::from(e)
            })?;

        info!("✅ Created cashier {}", row.id);
        Ok(row)
    }
}
