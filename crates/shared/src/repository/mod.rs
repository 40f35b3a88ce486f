mod cashier;
mod category;
mod customer;
mod payment_method;
mod product;
mod sale;
mod user_store;

pub use self::cashier::CashierRepository;
pub use self::category::CategoryRepository;
pub use self::customer::CustomerRepository;
pub use self::payment_method::PaymentMethodRepository;
pub use self::product::ProductRepository;
pub use self::sale::SaleRepository;
pub use self::user_store::InMemoryUserStore;
