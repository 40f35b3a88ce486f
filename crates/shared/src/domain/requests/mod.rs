mod auth;
mod cashier;
mod category;
mod customer;
mod product;
mod sale;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::cashier::{FindAllCashiers, RegisterCashierRecord};
pub use self::category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest};
pub use self::customer::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
pub use self::sale::{
    CreateSaleItemRequest, CreateSaleRecordRequest, CreateSaleRequest, FindAllSales,
    SaleItemRecord,
};
