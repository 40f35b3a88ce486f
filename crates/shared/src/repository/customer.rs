use crate::{
    abstract_trait::CustomerRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest},
    errors::RepositoryError,
    model::Customer,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CustomerRepository {
    db: ConnectionPool,
}

impl CustomerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn find_all(&self, req: &FindAllCustomers) -> Result<Vec<Customer>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let search = req.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

        let rows = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, address, place_of_birth, date_of_birth, contact_number,
                   email, gender_id, created_at, created_by, updated_at, updated_by
            FROM customers
            WHERE ($1::TEXT IS NULL
                   OR name ILIKE '%' || $1 || '%'
                   OR email ILIKE '%' || $1 || '%'
                   OR contact_number ILIKE '%' || $1 || '%'
                   OR id ILIKE '%' || $1 || '%')
            ORDER BY id DESC
            "#,
        )
        .bind(search)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customers: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, address, place_of_birth, date_of_birth, contact_number,
                   email, gender_id, created_at, created_by, updated_at, updated_by
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn create(&self, req: &CreateCustomerRequest) -> Result<Customer, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers
                (id, name, address, place_of_birth, date_of_birth, contact_number,
                 email, gender_id, created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now(), $9, now(), $10)
            RETURNING id, name, address, place_of_birth, date_of_birth, contact_number,
                      email, gender_id, created_at, created_by, updated_at, updated_by
            "#,
        )
        .bind(&req.id)
        .bind(&req.name)
        .bind(&req.address)
        .bind(&req.place_of_birth)
        .bind(req.date_of_birth)
        .bind(&req.contact_number)
        .bind(&req.email)
        .bind(&req.gender_id)
        .bind(req.created_by.as_deref())
        .bind(req.updated_by.as_deref())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create customer {}: {:?}", req.id, e);
            match e.as_database_error() {
                Some(db) if db.is_unique_violation() => {
                    RepositoryError::AlreadyExists(format!("Customer '{}'", req.id))
                }
                _ => RepositoryError::from(e),
            }
        })?;

        info!("✅ Created customer {}", row.id);
        Ok(row)
    }

    async fn update(
        &self,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = COALESCE($2, name),
                address = COALESCE($3, address),
                place_of_birth = COALESCE($4, place_of_birth),
                date_of_birth = COALESCE($5, date_of_birth),
                contact_number = COALESCE($6, contact_number),
                email = COALESCE($7, email),
                gender_id = COALESCE($8, gender_id),
                updated_at = now(),
                updated_by = COALESCE($9, updated_by)
            WHERE id = $1
            RETURNING id, name, address, place_of_birth, date_of_birth, contact_number,
                      email, gender_id, created_at, created_by, updated_at, updated_by
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.address.as_deref())
        .bind(req.place_of_birth.as_deref())
        .bind(req.date_of_birth)
        .bind(req.contact_number.as_deref())
        .bind(req.email.as_deref())
        .bind(req.gender_id.as_deref())
        .bind(req.updated_by.as_deref())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update customer {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM customers WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete customer {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
