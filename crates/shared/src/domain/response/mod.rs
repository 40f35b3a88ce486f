mod api;
mod auth;
mod cashier;
mod category;
mod customer;
mod product;
mod sale;

pub use self::api::ApiResponse;
pub use self::auth::AuthUser;
pub use self::cashier::CashierResponse;
pub use self::category::CategoryResponse;
pub use self::customer::CustomerResponse;
pub use self::product::{BestSellingProductResponse, ProductResponse};
pub use self::sale::{PaymentMethodResponse, SaleItemResponse, SaleResponse};
