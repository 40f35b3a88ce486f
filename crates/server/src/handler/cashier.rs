use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::{
        requests::FindAllCashiers,
        response::{ApiResponse, CashierResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/cashiers",
    tag = "Cashier",
    params(FindAllCashiers),
    responses(
        (status = 200, description = "List of cashiers (public projection)", body = ApiResponse<Vec<CashierResponse>>)
    )
)]
pub async fn get_cashiers(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FindAllCashiers>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.cashier_service.find_all(&params).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    get,
    path = "/api/cashiers/{id}",
    tag = "Cashier",
    responses(
        (status = 200, description = "Cashier detail (public projection)", body = ApiResponse<CashierResponse>),
        (status = 404, description = "Cashier not found")
    )
)]
pub async fn get_cashier(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.cashier_service.find_by_id(&id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

pub fn cashier_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cashiers", get(get_cashiers))
        .route("/api/cashiers/{id}", get(get_cashier))
        .layer(Extension(app_state))
}
