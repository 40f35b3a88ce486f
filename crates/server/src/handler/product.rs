use crate::middleware::{ValidatedJson, auth_middleware};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::{
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        response::{ApiResponse, BestSellingProductResponse, ProductResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Product listing; with bestSelling=1 each entry carries soldQty", body = ApiResponse<Vec<ProductResponse>>)
    )
)]
pub async fn get_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FindAllProducts>,
) -> Result<Response, HttpError> {
    let service = &state.di_container.product_service;

    if params.wants_best_selling() {
        let data: Vec<BestSellingProductResponse> = service.find_best_selling(&params).await?;
        return Ok((StatusCode::OK, Json(ApiResponse::new(data))).into_response());
    }

    let data = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(ApiResponse::new(data))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.product_service.find_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    get,
    path = "/api/products/slug/{slug}",
    tag = "Product",
    responses(
        (status = 200, description = "Product resolved by its derived slug", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product_by_slug(
    Extension(state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state
        .di_container
        .product_service
        .find_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed or unknown category")
    )
)]
pub async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.product_service.create(&req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.product_service.update(id, &req).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    state.di_container.product_service.delete(id).await?;

    Ok((StatusCode::OK, Json(json!({ "data": { "id": id } }))))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin_routes = OpenApiRouter::new()
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/slug/{slug}", get(get_product_by_slug))
        .route("/api/products/{id}", get(get_product))
        .merge(admin_routes)
        .layer(Extension(app_state))
}
