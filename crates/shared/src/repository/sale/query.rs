use crate::{
    abstract_trait::SaleQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllSales,
    errors::RepositoryError,
    model::{ProductSoldTotal, Sale, SaleItemDetail},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct SaleQueryRepository {
    db: ConnectionPool,
}

impl SaleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleQueryRepositoryTrait for SaleQueryRepository {
    async fn find_all(&self, req: &FindAllSales) -> Result<Vec<Sale>, RepositoryError> {
        info!("🔍 Fetching sales with search: {:?}", req.q);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer_id = req
            .customer_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty());
        let search = req.q.as_deref().map(str::trim).filter(|v| !v.is_empty());
        // A purely numeric search also matches the order id.
        let search_id = search.and_then(|v| v.parse::<i32>().ok());

        let rows = sqlx::query_as::<_, Sale>(
            r#"
            SELECT order_id, order_date, customer_id, cashier_id, method_id,
                   bank_trans, receipt_number, tracking_number, total
            FROM sales
            WHERE ($1::TEXT IS NULL OR customer_id = $1)
              AND ($2::TEXT IS NULL
                   OR receipt_number ILIKE '%' || $2 || '%'
                   OR tracking_number ILIKE '%' || $2 || '%'
                   OR order_id = $3)
            ORDER BY order_id DESC
            "#,
        )
        .bind(customer_id)
        .bind(search)
        .bind(search_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sales: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, order_id: i32) -> Result<Option<Sale>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Sale>(
            r#"
            SELECT order_id, order_date, customer_id, cashier_id, method_id,
                   bank_trans, receipt_number, tracking_number, total
            FROM sales
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<SaleItemDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, SaleItemDetail>(
            r#"
            SELECT si.order_id, si.product_id, si.qty, si.price,
                   p.name AS product_name, p.price AS product_price, p.category_id
            FROM sale_items si
            JOIN products p ON p.product_id = si.product_id
            WHERE si.order_id = $1
            ORDER BY si.product_id ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sale lines for {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn sold_totals(&self) -> Result<Vec<ProductSoldTotal>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, ProductSoldTotal>(
            r#"
            SELECT product_id, SUM(qty)::BIGINT AS sold_qty
            FROM sale_items
            GROUP BY product_id
            ORDER BY sold_qty DESC, product_id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate sold quantities: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }
}
