use crate::{
    abstract_trait::{
        DynCashierRepository, DynCategoryRepository, DynCustomerRepository, DynHashing,
        DynJwtService, DynPaymentMethodRepository, DynProductRepository, DynUserStore,
    },
    config::ConnectionPool,
    repository::{
        CashierRepository, CategoryRepository, CustomerRepository, PaymentMethodRepository,
        ProductRepository, SaleRepository,
    },
    service::{
        AuthService, CashierService, CategoryService, CustomerService, ProductService,
        SaleService, SaleServiceDeps,
    },
};
use std::sync::Arc;

pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub user_store: DynUserStore,
    pub default_cashier_id: String,
    pub default_method_id: String,
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: Arc<AuthService>,
    pub category_service: Arc<CategoryService>,
    pub product_service: Arc<ProductService>,
    pub customer_service: Arc<CustomerService>,
    pub cashier_service: Arc<CashierService>,
    pub sale_service: Arc<SaleService>,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("category_service", &"CategoryService")
            .field("product_service", &"ProductService")
            .field("customer_service", &"CustomerService")
            .field("cashier_service", &"CashierService")
            .field("sale_service", &"SaleService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            user_store,
            default_cashier_id,
            default_method_id,
        } = deps;

        let category_repository =
            Arc::new(CategoryRepository::new(pool.clone())) as DynCategoryRepository;
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let customer_repository =
            Arc::new(CustomerRepository::new(pool.clone())) as DynCustomerRepository;
        let cashier_repository =
            Arc::new(CashierRepository::new(pool.clone())) as DynCashierRepository;
        let method_repository =
            Arc::new(PaymentMethodRepository::new(pool.clone())) as DynPaymentMethodRepository;
        let sale_repository = SaleRepository::new(pool);

        let auth_service = Arc::new(AuthService::new(
            cashier_repository.clone(),
            user_store,
            hash,
            jwt_config,
        ));

        let category_service = Arc::new(CategoryService::new(category_repository));
        let product_service = Arc::new(ProductService::new(
            product_repository,
            sale_repository.query.clone(),
        ));
        let customer_service = Arc::new(CustomerService::new(customer_repository.clone()));
        let cashier_service = Arc::new(CashierService::new(cashier_repository.clone()));

        let sale_service = Arc::new(SaleService::new(SaleServiceDeps {
            command: sale_repository.command.clone(),
            query: sale_repository.query.clone(),
            customers: customer_repository,
            cashiers: cashier_repository,
            methods: method_repository,
            default_cashier_id,
            default_method_id,
        }));

        Self {
            auth_service,
            category_service,
            product_service,
            customer_service,
            cashier_service,
            sale_service,
        }
    }
}
