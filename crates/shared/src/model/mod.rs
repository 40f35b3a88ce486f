mod cashier;
mod category;
mod customer;
mod payment_method;
mod product;
mod sale;

pub use self::cashier::Cashier;
pub use self::category::Category;
pub use self::customer::Customer;
pub use self::payment_method::PaymentMethod;
pub use self::product::{Product, ProductSoldTotal};
pub use self::sale::{Sale, SaleItemDetail};
