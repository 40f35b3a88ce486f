use crate::{
    abstract_trait::{DynProductRepository, DynSaleQueryRepository},
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        response::{BestSellingProductResponse, ProductResponse},
    },
    errors::ServiceError,
    utils::slugify,
};
use std::collections::HashMap;
use tracing::info;

/// How many recent products the slug lookup scans. Slugs are derived, not
/// stored, so the lookup resolves them against the newest rows.
const SLUG_SCAN_LIMIT: i64 = 500;

pub struct ProductService {
    products: DynProductRepository,
    sales: DynSaleQueryRepository,
}

impl ProductService {
    pub fn new(products: DynProductRepository, sales: DynSaleQueryRepository) -> Self {
        Self { products, sales }
    }

    pub async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.products.find_all(req).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Products ranked by total quantity sold, descending, with ascending
    /// product id as the tiebreak. `limit` truncates after ranking. With no
    /// sale lines recorded yet the newest products stand in, each with a
    /// sold quantity of zero.
    pub async fn find_best_selling(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<BestSellingProductResponse>, ServiceError> {
        let mut totals = self.sales.sold_totals().await?;

        if totals.is_empty() {
            info!("📦 No sale lines yet, ranking falls back to newest products");
            let latest = self.products.find_latest(req.limit).await?;
            return Ok(latest
                .into_iter()
                .map(|product| BestSellingProductResponse::new(product, 0))
                .collect());
        }

        totals.sort_by(|a, b| {
            b.sold_qty
                .cmp(&a.sold_qty)
                .then(a.product_id.cmp(&b.product_id))
        });

        if let Some(limit) = req.limit {
            totals.truncate(limit.max(0) as usize);
        }

        let ids: Vec<i32> = totals.iter().map(|t| t.product_id).collect();
        let resolved = self
            .products
            .find_by_ids(&ids, req.category_id.as_deref(), req.q.as_deref())
            .await?;

        let mut by_id: HashMap<i32, _> = resolved
            .into_iter()
            .map(|product| (product.product_id, product))
            .collect();

        // Rank order is set by the totals; products that no longer exist or
        // fall outside the filters simply drop out.
        Ok(totals
            .iter()
            .filter_map(|t| {
                by_id
                    .remove(&t.product_id)
                    .map(|product| BestSellingProductResponse::new(product, t.sold_qty))
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {id} not found")))?;

        Ok(ProductResponse::from(product))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<ProductResponse, ServiceError> {
        let req = FindAllProducts {
            limit: Some(SLUG_SCAN_LIMIT),
            ..FindAllProducts::default()
        };
        let products = self.products.find_all(&req).await?;

        products
            .into_iter()
            .find(|product| slugify(&product.name) == slug)
            .map(ProductResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("Product '{slug}' not found")))
    }

    pub async fn create(&self, req: &CreateProductRequest) -> Result<ProductResponse, ServiceError> {
        let product = self.products.create(req).await?;
        Ok(ProductResponse::from(product))
    }

    pub async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let product = self.products.update(id, req).await.map_err(|err| {
            if matches!(err, crate::errors::RepositoryError::NotFound) {
                ServiceError::NotFound(format!("Product {id} not found"))
            } else {
                ServiceError::from(err)
            }
        })?;

        Ok(ProductResponse::from(product))
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.products.delete(id).await.map_err(|err| {
            if matches!(err, crate::errors::RepositoryError::NotFound) {
                ServiceError::NotFound(format!("Product {id} not found"))
            } else {
                ServiceError::from(err)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{ProductRepositoryTrait, SaleQueryRepositoryTrait},
        domain::requests::FindAllSales,
        errors::RepositoryError,
        model::{Product, ProductSoldTotal, Sale, SaleItemDetail},
    };
    use async_trait::async_trait;
    use std::sync::Arc;

    fn product(id: i32, name: &str, category: &str) -> Product {
        Product {
            product_id: id,
            name: name.to_string(),
            price: 1000,
            stock: Some(10),
            category_id: category.to_string(),
            category_name: "Alat Tulis".to_string(),
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
        }
    }

    struct FakeProductRepository {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ProductRepositoryTrait for FakeProductRepository {
        async fn find_all(
            &self,
            req: &FindAllProducts,
        ) -> Result<Vec<Product>, RepositoryError> {
            let mut products: Vec<Product> = self.products.clone();
            products.sort_by(|a, b| b.product_id.cmp(&a.product_id));
            if let Some(limit) = req.limit {
                products.truncate(limit.max(0) as usize);
            }
            Ok(products)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(self.products.iter().find(|p| p.product_id == id).cloned())
        }

        async fn find_by_ids(
            &self,
            ids: &[i32],
            category_id: Option<&str>,
            q: Option<&str>,
        ) -> Result<Vec<Product>, RepositoryError> {
            Ok(self
                .products
                .iter()
                .filter(|p| ids.contains(&p.product_id))
                .filter(|p| match category_id {
                    Some(c) => p.category_id == c,
                    None => true,
                })
                .filter(|p| match q {
                    Some(q) => p.name.to_lowercase().contains(&q.to_lowercase()),
                    None => true,
                })
                .cloned()
                .collect())
        }

        async fn find_latest(
            &self,
            limit: Option<i64>,
        ) -> Result<Vec<Product>, RepositoryError> {
            let mut products = self.products.clone();
            products.sort_by(|a, b| b.product_id.cmp(&a.product_id));
            if let Some(limit) = limit {
                products.truncate(limit.max(0) as usize);
            }
            Ok(products)
        }

        async fn create(
            &self,
            _req: &CreateProductRequest,
        ) -> Result<Product, RepositoryError> {
            Err(RepositoryError::Custom("not supported".into()))
        }

        async fn update(
            &self,
            _id: i32,
            _req: &UpdateProductRequest,
        ) -> Result<Product, RepositoryError> {
            Err(RepositoryError::Custom("not supported".into()))
        }

        async fn delete(&self, _id: i32) -> Result<(), RepositoryError> {
            Err(RepositoryError::Custom("not supported".into()))
        }
    }

    struct FakeSoldTotals {
        totals: Vec<ProductSoldTotal>,
    }

    #[async_trait]
    impl SaleQueryRepositoryTrait for FakeSoldTotals {
        async fn find_all(&self, _req: &FindAllSales) -> Result<Vec<Sale>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _order_id: i32) -> Result<Option<Sale>, RepositoryError> {
            Ok(None)
        }

        async fn find_items(
            &self,
            _order_id: i32,
        ) -> Result<Vec<SaleItemDetail>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn sold_totals(&self) -> Result<Vec<ProductSoldTotal>, RepositoryError> {
            Ok(self.totals.clone())
        }
    }

    fn service(products: Vec<Product>, totals: Vec<(i32, i64)>) -> ProductService {
        ProductService::new(
            Arc::new(FakeProductRepository { products }),
            Arc::new(FakeSoldTotals {
                totals: totals
                    .into_iter()
                    .map(|(product_id, sold_qty)| ProductSoldTotal {
                        product_id,
                        sold_qty,
                    })
                    .collect(),
            }),
        )
    }

    fn ranking_request(limit: Option<i64>) -> FindAllProducts {
        FindAllProducts {
            best_selling: Some("1".to_string()),
            limit,
            ..FindAllProducts::default()
        }
    }

    #[tokio::test]
    async fn ranks_by_sold_quantity_descending() {
        // Totals arrive unsorted; the ranking must not depend on their order.
        let svc = service(
            vec![
                product(1, "Pulpen Gel", "AT"),
                product(2, "Buku Tulis", "BK"),
            ],
            vec![(2, 7), (1, 10)],
        );

        let ranked = svc.find_best_selling(&ranking_request(None)).await.unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].product.id, 1);
        assert_eq!(ranked[0].sold_qty, 10);
        assert_eq!(ranked[1].product.id, 2);
        assert_eq!(ranked[1].sold_qty, 7);
    }

    #[tokio::test]
    async fn ties_break_on_ascending_product_id() {
        let svc = service(
            vec![
                product(2, "Buku Tulis", "BK"),
                product(5, "Penghapus", "AT"),
            ],
            vec![(5, 3), (2, 3)],
        );

        let ranked = svc.find_best_selling(&ranking_request(None)).await.unwrap();

        assert_eq!(ranked[0].product.id, 2);
        assert_eq!(ranked[1].product.id, 5);
    }

    #[tokio::test]
    async fn limit_truncates_after_ranking() {
        let svc = service(
            vec![
                product(1, "Pulpen Gel", "AT"),
                product(2, "Buku Tulis", "BK"),
            ],
            vec![(2, 7), (1, 10)],
        );

        let ranked = svc
            .find_best_selling(&ranking_request(Some(1)))
            .await
            .unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].product.id, 1);
        assert_eq!(ranked[0].sold_qty, 10);
    }

    #[tokio::test]
    async fn cold_start_falls_back_to_newest_products() {
        let svc = service(
            vec![
                product(1, "Pulpen Gel", "AT"),
                product(2, "Buku Tulis", "BK"),
                product(3, "Penggaris", "AT"),
            ],
            Vec::new(),
        );

        let ranked = svc
            .find_best_selling(&ranking_request(Some(2)))
            .await
            .unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].product.id, 3);
        assert_eq!(ranked[1].product.id, 2);
        assert!(ranked.iter().all(|r| r.sold_qty == 0));
    }

    #[tokio::test]
    async fn vanished_products_drop_out_without_reordering() {
        // Product 99 has sale lines but no longer exists.
        let svc = service(
            vec![
                product(1, "Pulpen Gel", "AT"),
                product(2, "Buku Tulis", "BK"),
            ],
            vec![(99, 20), (1, 10), (2, 7)],
        );

        let ranked = svc.find_best_selling(&ranking_request(None)).await.unwrap();

        let ids: Vec<i32> = ranked.iter().map(|r| r.product.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn category_filter_applies_to_the_resolved_set() {
        let svc = service(
            vec![
                product(1, "Pulpen Gel", "AT"),
                product(2, "Buku Tulis", "BK"),
                product(3, "Penggaris", "AT"),
            ],
            vec![(2, 9), (1, 5), (3, 2)],
        );

        let req = FindAllProducts {
            category_id: Some("AT".to_string()),
            ..ranking_request(None)
        };
        let ranked = svc.find_best_selling(&req).await.unwrap();

        let ids: Vec<i32> = ranked.iter().map(|r| r.product.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn name_filter_shrinks_the_ranked_page_without_reordering() {
        let svc = service(
            vec![
                product(1, "Pulpen Gel", "AT"),
                product(2, "Buku Tulis", "BK"),
                product(3, "Pulpen Tinta", "AT"),
            ],
            vec![(2, 9), (3, 5), (1, 2)],
        );

        let req = FindAllProducts {
            q: Some("pulpen".to_string()),
            ..ranking_request(None)
        };
        let ranked = svc.find_best_selling(&req).await.unwrap();

        // Product 2 outsells both but does not match; the survivors keep
        // their relative rank.
        let ids: Vec<i32> = ranked.iter().map(|r| r.product.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(ranked[0].sold_qty, 5);
        assert_eq!(ranked[1].sold_qty, 2);
    }

    #[tokio::test]
    async fn resolves_products_by_derived_slug() {
        let svc = service(vec![product(1, "Kenko Pulpen Gel 2 Pcs", "AT")], Vec::new());

        let found = svc.find_by_slug("kenko-pulpen-gel-2-pcs").await.unwrap();
        assert_eq!(found.id, 1);

        let err = svc.find_by_slug("no-such-product").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
