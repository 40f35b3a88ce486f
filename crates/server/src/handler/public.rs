use axum::{
    Extension, Json, extract::Query, http::StatusCode, response::IntoResponse, routing::get,
};
use serde::Deserialize;
use serde_json::json;
use shared::{
    domain::requests::{FindAllCategories, FindAllProducts},
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;

const DEFAULT_BEST_LIMIT: i64 = 4;
const DEFAULT_EXPLORE_LIMIT: i64 = 8;
const DEFAULT_NEW_LIMIT: i64 = 8;
const DEFAULT_THEME_CATEGORY: &str = "AT";

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct HomeQuery {
    pub best_limit: Option<i64>,
    pub explore_limit: Option<i64>,
    pub new_limit: Option<i64>,
    /// Category featured in the "explore" strip.
    pub theme_category_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/public/home",
    tag = "Public",
    params(HomeQuery),
    responses(
        (status = 200, description = "Homepage payload: best sellers, explore strip, newest arrivals, categories")
    )
)]
pub async fn get_home_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<HomeQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let products = &state.di_container.product_service;
    let categories = &state.di_container.category_service;

    let best_sellers = products
        .find_best_selling(&FindAllProducts {
            best_selling: Some("1".to_string()),
            limit: Some(params.best_limit.unwrap_or(DEFAULT_BEST_LIMIT)),
            ..FindAllProducts::default()
        })
        .await?;

    let theme_category = params
        .theme_category_id
        .clone()
        .unwrap_or_else(|| DEFAULT_THEME_CATEGORY.to_string());

    let explore = products
        .find_all(&FindAllProducts {
            category_id: Some(theme_category.clone()),
            limit: Some(params.explore_limit.unwrap_or(DEFAULT_EXPLORE_LIMIT)),
            ..FindAllProducts::default()
        })
        .await?;

    let new_arrivals = products
        .find_all(&FindAllProducts {
            limit: Some(params.new_limit.unwrap_or(DEFAULT_NEW_LIMIT)),
            ..FindAllProducts::default()
        })
        .await?;

    let category_list = categories.find_all(&FindAllCategories::default()).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "data": {
                "bestSellers": best_sellers,
                "explore": explore,
                "exploreCategoryId": theme_category,
                "newArrivals": new_arrivals,
                "categories": category_list,
            }
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/public/config",
    tag = "Public",
    responses(
        (status = 200, description = "Public runtime configuration")
    )
)]
pub async fn get_config_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((
        StatusCode::OK,
        Json(json!({
            "data": {
                "googleClientId": state.google_client_id,
            }
        })),
    ))
}

pub fn public_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/public/home", get(get_home_handler))
        .route("/api/public/config", get(get_config_handler))
        .layer(Extension(app_state))
}
