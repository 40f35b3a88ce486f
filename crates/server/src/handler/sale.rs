use crate::middleware::{ValidatedJson, auth_middleware};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde_json::json;
use shared::{
    domain::{
        requests::{CreateSaleRequest, FindAllSales},
        response::{ApiResponse, SaleResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sale",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded atomically; total recomputed server-side", body = ApiResponse<SaleResponse>),
        (status = 400, description = "Validation failed or persistence error (nothing written)")
    )
)]
pub async fn create_sale(
    Extension(state): Extension<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateSaleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.sale_service.create_sale(&req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sale",
    params(FindAllSales),
    responses(
        (status = 200, description = "List of sales, hydrated", body = ApiResponse<Vec<SaleResponse>>)
    )
)]
pub async fn get_sales(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FindAllSales>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.sale_service.find_all(&params).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = "Sale",
    responses(
        (status = 200, description = "Sale detail, hydrated", body = ApiResponse<SaleResponse>),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn get_sale(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.sale_service.find_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = "Sale",
    responses(
        (status = 200, description = "Sale deleted; lines cascade"),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn delete_sale(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    state.di_container.sale_service.delete(id).await?;

    Ok((StatusCode::OK, Json(json!({ "data": { "id": id } }))))
}

pub fn sale_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin_routes = OpenApiRouter::new()
        .route("/api/sales/{id}", delete(delete_sale))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    OpenApiRouter::new()
        .route("/api/sales", post(create_sale))
        .route("/api/sales", get(get_sales))
        .route("/api/sales/{id}", get(get_sale))
        .merge(admin_routes)
        .layer(Extension(app_state))
}
