use crate::{
    abstract_trait::CategoryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(&self, req: &FindAllCategories) -> Result<Vec<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let search = req.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

        let rows = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name
            FROM product_categories
            WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%' OR id ILIKE '%' || $1 || '%')
            ORDER BY name ASC
            "#,
        )
        .bind(search)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name FROM product_categories WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO product_categories (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(&req.id)
        .bind(&req.name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create category {}: {:?}", req.id, e);
            match e.as_database_error() {
                Some(db) if db.is_unique_violation() => {
                    RepositoryError::AlreadyExists(format!("Category '{}'", req.id))
                }
                _ => RepositoryError::from(e),
            }
        })?;

        info!("✅ Created category {}", row.id);
        Ok(row)
    }

    async fn update(
        &self,
        id: &str,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Category>(
            r#"
            UPDATE product_categories
            SET id = COALESCE($2, id),
                name = COALESCE($3, name)
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(req.id.as_deref())
        .bind(req.name.as_deref())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update category {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM product_categories WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete category {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
