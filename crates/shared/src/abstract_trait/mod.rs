mod cashier;
mod category;
mod customer;
mod hashing;
mod jwt;
mod payment_method;
mod product;
mod sale;
mod user_store;

pub use self::cashier::{CashierRepositoryTrait, DynCashierRepository};
pub use self::category::{CategoryRepositoryTrait, DynCategoryRepository};
pub use self::customer::{CustomerRepositoryTrait, DynCustomerRepository};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::payment_method::{DynPaymentMethodRepository, PaymentMethodRepositoryTrait};
pub use self::product::{DynProductRepository, ProductRepositoryTrait};
pub use self::sale::{
    DynSaleCommandRepository, DynSaleQueryRepository, SaleCommandRepositoryTrait,
    SaleQueryRepositoryTrait,
};
pub use self::user_store::{DynUserStore, StoredUser, UserStoreTrait};
