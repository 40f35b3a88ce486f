use crate::{
    abstract_trait::{
        DynCashierRepository, DynCustomerRepository, DynPaymentMethodRepository,
        DynSaleCommandRepository, DynSaleQueryRepository,
    },
    domain::{
        requests::{CreateSaleRecordRequest, CreateSaleRequest, FindAllSales, SaleItemRecord},
        response::SaleResponse,
    },
    errors::ServiceError,
    model::Sale,
};
use chrono::Utc;
use tracing::{error, info};

pub struct SaleServiceDeps {
    pub command: DynSaleCommandRepository,
    pub query: DynSaleQueryRepository,
    pub customers: DynCustomerRepository,
    pub cashiers: DynCashierRepository,
    pub methods: DynPaymentMethodRepository,
    pub default_cashier_id: String,
    pub default_method_id: String,
}

pub struct SaleService {
    command: DynSaleCommandRepository,
    query: DynSaleQueryRepository,
    customers: DynCustomerRepository,
    cashiers: DynCashierRepository,
    methods: DynPaymentMethodRepository,
    default_cashier_id: String,
    default_method_id: String,
}

impl SaleService {
    pub fn new(deps: SaleServiceDeps) -> Self {
        let SaleServiceDeps {
            command,
            query,
            customers,
            cashiers,
            methods,
            default_cashier_id,
            default_method_id,
        } = deps;

        Self {
            command,
            query,
            customers,
            cashiers,
            methods,
            default_cashier_id,
            default_method_id,
        }
    }

    /// The stored total is always recomputed from the lines; a total sent by
    /// the client never reaches this point. Line and running totals use
    /// checked arithmetic so a pathological price cannot wrap into a
    /// negative stored total.
    fn compute_total(items: &[SaleItemRecord]) -> Result<i64, ServiceError> {
        items.iter().try_fold(0i64, |acc, item| {
            i64::from(item.qty)
                .checked_mul(item.price)
                .and_then(|line_total| acc.checked_add(line_total))
                .ok_or_else(|| {
                    ServiceError::validation("Sale total exceeds the representable range")
                })
        })
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }

    pub async fn create_sale(&self, req: &CreateSaleRequest) -> Result<SaleResponse, ServiceError> {
        if req.items.is_empty() {
            return Err(ServiceError::validation("A sale requires at least one item"));
        }

        let items: Vec<SaleItemRecord> = req
            .items
            .iter()
            .map(|item| SaleItemRecord {
                product_id: item.product_id,
                qty: item.qty,
                price: item.price,
            })
            .collect();

        let total = Self::compute_total(&items)?;

        let record = CreateSaleRecordRequest {
            customer_id: Self::non_empty(req.customer_id.clone()),
            cashier_id: Self::non_empty(req.cashier_id.clone())
                .unwrap_or_else(|| self.default_cashier_id.clone()),
            method_id: Self::non_empty(req.method_id.clone())
                .unwrap_or_else(|| self.default_method_id.clone()),
            order_date: req.order_date.unwrap_or_else(Utc::now),
            bank_trans: Self::non_empty(req.bank_trans.clone()),
            receipt_number: Self::non_empty(req.receipt_number.clone()),
            tracking_number: Self::non_empty(req.tracking_number.clone()),
            total,
            items,
        };

        let sale = self.command.create_sale(&record).await.map_err(|err| {
            error!("❌ Sale was not persisted, nothing written: {:?}", err);
            ServiceError::from(err)
        })?;

        info!(
            "🛒 Recorded sale {} ({} line(s), total {})",
            sale.order_id,
            record.items.len(),
            sale.total
        );

        self.hydrate(sale).await
    }

    pub async fn find_all(&self, req: &FindAllSales) -> Result<Vec<SaleResponse>, ServiceError> {
        let sales = self.query.find_all(req).await?;

        let mut responses = Vec::with_capacity(sales.len());
        for sale in sales {
            responses.push(self.hydrate(sale).await?);
        }

        Ok(responses)
    }

    pub async fn find_by_id(&self, order_id: i32) -> Result<SaleResponse, ServiceError> {
        let sale = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Sale {order_id} not found")))?;

        self.hydrate(sale).await
    }

    pub async fn delete(&self, order_id: i32) -> Result<(), ServiceError> {
        self.command.delete_sale(order_id).await.map_err(|err| {
            if matches!(err, crate::errors::RepositoryError::NotFound) {
                ServiceError::NotFound(format!("Sale {order_id} not found"))
            } else {
                ServiceError::from(err)
            }
        })
    }

    /// Resolves the parties and lines a stored sale references. The cashier
    /// and method are FK-guaranteed; a miss here means the data is corrupt.
    async fn hydrate(&self, sale: Sale) -> Result<SaleResponse, ServiceError> {
        let customer = match sale.customer_id.as_deref() {
            Some(id) => self.customers.find_by_id(id).await?,
            None => None,
        };

        let cashier = self
            .cashiers
            .find_by_id(&sale.cashier_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Internal(format!(
                    "Cashier {} referenced by sale {} does not exist",
                    sale.cashier_id, sale.order_id
                ))
            })?;

        let method = self
            .methods
            .find_by_id(&sale.method_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Internal(format!(
                    "Payment method {} referenced by sale {} does not exist",
                    sale.method_id, sale.order_id
                ))
            })?;

        let items = self.query.find_items(sale.order_id).await?;

        Ok(SaleResponse::from_parts(sale, customer, cashier, method, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            CashierRepositoryTrait, CustomerRepositoryTrait, PaymentMethodRepositoryTrait,
            SaleCommandRepositoryTrait, SaleQueryRepositoryTrait,
        },
        domain::requests::{
            CreateCustomerRequest, CreateSaleItemRequest, FindAllCashiers, FindAllCustomers,
            RegisterCashierRecord, UpdateCustomerRequest,
        },
        errors::RepositoryError,
        model::{Cashier, Customer, PaymentMethod, ProductSoldTotal, SaleItemDetail},
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct SaleStoreState {
        next_id: i32,
        sales: Vec<Sale>,
        items: Vec<(i32, SaleItemRecord)>,
        fail_create: bool,
    }

    /// In-memory stand-in for the sales tables. Backs both the command and
    /// query sides so a failed create is observable as an empty store.
    #[derive(Clone)]
    struct FakeSaleStore {
        state: Arc<Mutex<SaleStoreState>>,
        products: HashMap<i32, (String, i64, String)>,
    }

    impl FakeSaleStore {
        fn new() -> Self {
            let mut products = HashMap::new();
            products.insert(1, ("Kenko Pulpen Gel 2 Pcs".to_string(), 2500, "AT".to_string()));
            products.insert(2, ("Joyko Ball Pen 1 Pack".to_string(), 6000, "AT".to_string()));

            Self {
                state: Arc::new(Mutex::new(SaleStoreState {
                    next_id: 1,
                    ..SaleStoreState::default()
                })),
                products,
            }
        }

        fn failing() -> Self {
            let store = Self::new();
            store.state.lock().unwrap().fail_create = true;
            store
        }

        fn sale_count(&self) -> usize {
            self.state.lock().unwrap().sales.len()
        }

        fn item_count(&self) -> usize {
            self.state.lock().unwrap().items.len()
        }
    }

    #[async_trait]
    impl SaleCommandRepositoryTrait for FakeSaleStore {
        async fn create_sale(
            &self,
            record: &CreateSaleRecordRequest,
        ) -> Result<Sale, RepositoryError> {
            let mut state = self.state.lock().unwrap();

            if state.fail_create {
                return Err(RepositoryError::Custom("connection reset".into()));
            }

            let order_id = state.next_id;
            state.next_id += 1;

            let sale = Sale {
                order_id,
                order_date: record.order_date,
                customer_id: record.customer_id.clone(),
                cashier_id: record.cashier_id.clone(),
                method_id: record.method_id.clone(),
                bank_trans: record.bank_trans.clone(),
                receipt_number: record.receipt_number.clone(),
                tracking_number: record.tracking_number.clone(),
                total: record.total,
            };

            state.sales.push(sale.clone());
            for item in &record.items {
                state.items.push((order_id, *item));
            }

            Ok(sale)
        }

        async fn delete_sale(&self, order_id: i32) -> Result<(), RepositoryError> {
            let mut state = self.state.lock().unwrap();
            let before = state.sales.len();
            state.sales.retain(|s| s.order_id != order_id);
            if state.sales.len() == before {
                return Err(RepositoryError::NotFound);
            }
            state.items.retain(|(id, _)| *id != order_id);
            Ok(())
        }
    }

    #[async_trait]
    impl SaleQueryRepositoryTrait for FakeSaleStore {
        async fn find_all(&self, req: &FindAllSales) -> Result<Vec<Sale>, RepositoryError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .sales
                .iter()
                .filter(|s| match req.customer_id.as_deref() {
                    Some(id) => s.customer_id.as_deref() == Some(id),
                    None => true,
                })
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, order_id: i32) -> Result<Option<Sale>, RepositoryError> {
            let state = self.state.lock().unwrap();
            Ok(state.sales.iter().find(|s| s.order_id == order_id).cloned())
        }

        async fn find_items(&self, order_id: i32) -> Result<Vec<SaleItemDetail>, RepositoryError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .items
                .iter()
                .filter(|(id, _)| *id == order_id)
                .map(|(id, item)| {
                    let (name, price, category) = self.products[&item.product_id].clone();
                    SaleItemDetail {
                        order_id: *id,
                        product_id: item.product_id,
                        qty: item.qty,
                        price: item.price,
                        product_name: name,
                        product_price: price,
                        category_id: category,
                    }
                })
                .collect())
        }

        async fn sold_totals(&self) -> Result<Vec<ProductSoldTotal>, RepositoryError> {
            let state = self.state.lock().unwrap();
            let mut by_product: HashMap<i32, i64> = HashMap::new();
            for (_, item) in &state.items {
                *by_product.entry(item.product_id).or_default() += i64::from(item.qty);
            }
            let mut totals: Vec<ProductSoldTotal> = by_product
                .into_iter()
                .map(|(product_id, sold_qty)| ProductSoldTotal {
                    product_id,
                    sold_qty,
                })
                .collect();
            totals.sort_by(|a, b| {
                b.sold_qty
                    .cmp(&a.sold_qty)
                    .then(a.product_id.cmp(&b.product_id))
            });
            Ok(totals)
        }
    }

    struct FakeCashierRepository;

    fn sample_cashier(id: &str) -> Cashier {
        Cashier {
            id: id.to_string(),
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            contact_number: "080000000000".to_string(),
            address: "-".to_string(),
            place_of_birth: "-".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            gender_id: "L".to_string(),
            password: "hash".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait]
    impl CashierRepositoryTrait for FakeCashierRepository {
        async fn find_all(&self, _req: &FindAllCashiers) -> Result<Vec<Cashier>, RepositoryError> {
            Ok(vec![sample_cashier("12345678")])
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Cashier>, RepositoryError> {
            Ok((id == "12345678").then(|| sample_cashier(id)))
        }

        async fn find_by_identifier(
            &self,
            _identifier: &str,
        ) -> Result<Option<Cashier>, RepositoryError> {
            Ok(None)
        }

        async fn create(
            &self,
            _record: &RegisterCashierRecord,
        ) -> Result<Cashier, RepositoryError> {
            Err(RepositoryError::Custom("not supported".into()))
        }
    }

    struct FakeCustomerRepository;

    #[async_trait]
    impl CustomerRepositoryTrait for FakeCustomerRepository {
        async fn find_all(
            &self,
            _req: &FindAllCustomers,
        ) -> Result<Vec<Customer>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<Customer>, RepositoryError> {
            Ok(None)
        }

        async fn create(
            &self,
            _req: &CreateCustomerRequest,
        ) -> Result<Customer, RepositoryError> {
            Err(RepositoryError::Custom("not supported".into()))
        }

        async fn update(
            &self,
            _id: &str,
            _req: &UpdateCustomerRequest,
        ) -> Result<Customer, RepositoryError> {
            Err(RepositoryError::Custom("not supported".into()))
        }

        async fn delete(&self, _id: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::Custom("not supported".into()))
        }
    }

    struct FakeMethodRepository;

    #[async_trait]
    impl PaymentMethodRepositoryTrait for FakeMethodRepository {
        async fn find_all(&self) -> Result<Vec<PaymentMethod>, RepositoryError> {
            Ok(vec![PaymentMethod {
                id: "1".to_string(),
                method: "Cash".to_string(),
            }])
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<PaymentMethod>, RepositoryError> {
            Ok((id == "1").then(|| PaymentMethod {
                id: "1".to_string(),
                method: "Cash".to_string(),
            }))
        }
    }

    fn service_with(store: FakeSaleStore) -> SaleService {
        let store = Arc::new(store);
        SaleService::new(SaleServiceDeps {
            command: store.clone(),
            query: store,
            customers: Arc::new(FakeCustomerRepository),
            cashiers: Arc::new(FakeCashierRepository),
            methods: Arc::new(FakeMethodRepository),
            default_cashier_id: "12345678".to_string(),
            default_method_id: "1".to_string(),
        })
    }

    fn request_with_items(items: Vec<CreateSaleItemRequest>) -> CreateSaleRequest {
        CreateSaleRequest {
            customer_id: None,
            cashier_id: None,
            method_id: None,
            order_date: None,
            bank_trans: None,
            receipt_number: None,
            tracking_number: None,
            items,
        }
    }

    #[tokio::test]
    async fn computes_total_from_lines_and_applies_defaults() {
        let store = FakeSaleStore::new();
        let service = service_with(store.clone());

        let req = request_with_items(vec![
            CreateSaleItemRequest {
                product_id: 1,
                qty: 2,
                price: 2500,
            },
            CreateSaleItemRequest {
                product_id: 2,
                qty: 1,
                price: 6000,
            },
        ]);

        let resp = service.create_sale(&req).await.unwrap();

        assert_eq!(resp.total, 11000);
        assert_eq!(resp.cashier.id, "12345678");
        assert_eq!(resp.method.id, "1");
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[0].product_name, "Kenko Pulpen Gel 2 Pcs");
        assert_eq!(resp.items[1].product_name, "Joyko Ball Pen 1 Pack");
        assert_eq!(store.sale_count(), 1);
        assert_eq!(store.item_count(), 2);
    }

    #[tokio::test]
    async fn rejects_empty_item_list_without_writing() {
        let store = FakeSaleStore::new();
        let service = service_with(store.clone());

        let err = service
            .create_sale(&request_with_items(Vec::new()))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation { .. }));
        assert_eq!(store.sale_count(), 0);
        assert_eq!(store.item_count(), 0);
    }

    #[tokio::test]
    async fn overflowing_total_is_rejected_without_writing() {
        let store = FakeSaleStore::new();
        let service = service_with(store.clone());

        // Each line passes field validation on its own; only the summed
        // total is out of range.
        let req = request_with_items(vec![CreateSaleItemRequest {
            product_id: 1,
            qty: 2,
            price: i64::MAX / 2 + 1,
        }]);

        let err = service.create_sale(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation { .. }));
        assert_eq!(store.sale_count(), 0);
        assert_eq!(store.item_count(), 0);
    }

    #[tokio::test]
    async fn failed_persist_leaves_no_rows_behind() {
        let store = FakeSaleStore::failing();
        let service = service_with(store.clone());

        let req = request_with_items(vec![CreateSaleItemRequest {
            product_id: 1,
            qty: 3,
            price: 2500,
        }]);

        let err = service.create_sale(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Repo(_)));
        assert_eq!(store.sale_count(), 0);
        assert_eq!(store.item_count(), 0);
    }

    #[tokio::test]
    async fn unknown_sale_is_not_found() {
        let service = service_with(FakeSaleStore::new());

        let err = service.find_by_id(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = service.delete(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
