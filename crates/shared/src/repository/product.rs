use crate::{
    abstract_trait::ProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

const PRODUCT_COLUMNS: &str = r#"
    p.product_id, p.name, p.price, p.stock, p.category_id,
    c.name AS category_name,
    p.created_at, p.created_by, p.updated_at, p.updated_by
"#;

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching products with search: {:?}", req.q);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let search = req.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN product_categories c ON c.id = p.category_id
            WHERE ($1::TEXT IS NULL OR p.name ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR p.category_id = $2)
            ORDER BY p.product_id DESC
            LIMIT $3
            "#
        );

        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(search)
            .bind(req.category_id.as_deref())
            .bind(req.limit)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN product_categories c ON c.id = p.category_id
            WHERE p.product_id = $1
            "#
        );

        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn find_by_ids(
        &self,
        ids: &[i32],
        category_id: Option<&str>,
        q: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let search = q.map(str::trim).filter(|q| !q.is_empty());

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN product_categories c ON c.id = p.category_id
            WHERE p.product_id = ANY($1)
              AND ($2::TEXT IS NULL OR p.category_id = $2)
              AND ($3::TEXT IS NULL OR p.name ILIKE '%' || $3 || '%')
            "#
        );

        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(ids)
            .bind(category_id)
            .bind(search)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to resolve product ids: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(rows)
    }

    async fn find_latest(&self, limit: Option<i64>) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN product_categories c ON c.id = p.category_id
            ORDER BY p.product_id DESC
            LIMIT $1
            "#
        );

        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch latest products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(rows)
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let created_by = req.created_by.as_deref().unwrap_or("admin");
        let updated_by = req
            .updated_by
            .as_deref()
            .or(req.created_by.as_deref())
            .unwrap_or("admin");

        let row = sqlx::query_as::<_, Product>(
            r#"
            WITH inserted AS (
                INSERT INTO products (name, price, category_id, stock, created_at, created_by, updated_at, updated_by)
                VALUES ($1, $2, $3, $4, now(), $5, now(), $6)
                RETURNING *
            )
            SELECT p.product_id, p.name, p.price, p.stock, p.category_id,
                   c.name AS category_name,
                   p.created_at, p.created_by, p.updated_at, p.updated_by
            FROM inserted p
            JOIN product_categories c ON c.id = p.category_id
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.category_id)
        .bind(req.stock)
        .bind(created_by)
        .bind(updated_by)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product {}: {:?}", req.name, e);
            match e.as_database_error() {
                Some(db) if db.is_foreign_key_violation() => {
                    RepositoryError::ForeignKey(format!("category '{}'", req.category_id))
                }
                _ => RepositoryError::from(e),
            }
        })?;

        info!("✅ Created product ID {}", row.product_id);
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Product>(
            r#"
            WITH updated AS (
                UPDATE products
                SET name = COALESCE($2, name),
                    price = COALESCE($3, price),
                    category_id = COALESCE($4, category_id),
                    stock = COALESCE($5, stock),
                    updated_at = now(),
                    updated_by = COALESCE($6, 'admin')
                WHERE product_id = $1
                RETURNING *
            )
            SELECT p.product_id, p.name, p.price, p.stock, p.category_id,
                   c.name AS category_name,
                   p.created_at, p.created_by, p.updated_at, p.updated_by
            FROM updated p
            JOIN product_categories c ON c.id = p.category_id
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.price)
        .bind(req.category_id.as_deref())
        .bind(req.stock)
        .bind(req.updated_by.as_deref())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {}: {:?}", id, e);
            match e.as_database_error() {
                Some(db) if db.is_foreign_key_violation() => RepositoryError::ForeignKey(
                    format!("category '{}'", req.category_id.as_deref().unwrap_or("?")),
                ),
                _ => RepositoryError::from(e),
            }
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", row.product_id);
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products WHERE product_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
