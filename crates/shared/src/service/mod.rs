mod auth;
mod cashier;
mod category;
mod customer;
mod product;
mod sale;

pub use self::auth::AuthService;
pub use self::cashier::CashierService;
pub use self::category::CategoryService;
pub use self::customer::CustomerService;
pub use self::product::ProductService;
pub use self::sale::{SaleService, SaleServiceDeps};
