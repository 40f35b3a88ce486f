use crate::middleware::{ValidatedJson, auth_middleware};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::{
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        response::{ApiResponse, CategoryResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Category",
    params(FindAllCategories),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponse>>)
    )
)]
pub async fn get_categories(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FindAllCategories>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state
        .di_container
        .category_service
        .find_all(&params)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Category",
    responses(
        (status = 200, description = "Category detail", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.category_service.find_by_id(&id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 409, description = "Category already exists")
    )
)]
pub async fn create_category(
    Extension(state): Extension<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.category_service.create(&req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Category",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state
        .di_container
        .category_service
        .update(&id, &req)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Category",
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    state.di_container.category_service.delete(&id).await?;

    Ok((StatusCode::OK, Json(json!({ "data": { "id": id } }))))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin_routes = OpenApiRouter::new()
        .route("/api/categories", post(create_category))
        .route("/api/categories/{id}", put(update_category))
        .route("/api/categories/{id}", delete(delete_category))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories/{id}", get(get_category))
        .merge(admin_routes)
        .layer(Extension(app_state))
}
