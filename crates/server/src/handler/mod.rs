mod auth;
mod cashier;
mod category;
mod customer;
mod product;
mod public;
mod sale;

use anyhow::Result;
use axum::{Json, extract::DefaultBodyLimit, routing::get};
use chrono::Utc;
use serde_json::json;
use shared::{state::AppState, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::cashier::cashier_routes;
pub use self::category::category_routes;
pub use self::customer::customer_routes;
pub use self::product::product_routes;
pub use self::public::public_routes;
pub use self::sale::sale_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::get_me_handler,
        auth::logout_user_handler,

        product::get_products,
        product::get_product,
        product::get_product_by_slug,
        product::create_product,
        product::update_product,
        product::delete_product,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,

        customer::get_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,

        cashier::get_cashiers,
        cashier::get_cashier,

        sale::create_sale,
        sale::get_sales,
        sale::get_sale,
        sale::delete_sale,

        public::get_home_handler,
        public::get_config_handler,
    ),
    tags(
        (name = "Auth", description = "Session endpoints"),
        (name = "Product", description = "Product catalog and best-selling ranking"),
        (name = "Category", description = "Product category endpoints"),
        (name = "Customer", description = "Customer endpoints"),
        (name = "Cashier", description = "Cashier endpoints"),
        (name = "Sale", description = "Sale recording and lookup"),
        (name = "Public", description = "Unauthenticated storefront endpoints"),
    )
)]
struct ApiDoc;

pub async fn health_check_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "atk-web-backend",
        "timestamp": Utc::now(),
    }))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/health", get(health_check_handler))
            .merge(auth_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(cashier_routes(shared_state.clone()))
            .merge(sale_routes(shared_state.clone()))
            .merge(public_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
