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
        requests::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest},
        response::{ApiResponse, CustomerResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customer",
    params(FindAllCustomers),
    responses(
        (status = 200, description = "List of customers", body = ApiResponse<Vec<CustomerResponse>>)
    )
)]
pub async fn get_customers(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FindAllCustomers>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state
        .di_container
        .customer_service
        .find_all(&params)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customer",
    responses(
        (status = 200, description = "Customer detail", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.customer_service.find_by_id(&id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerResponse>),
        (status = 409, description = "Customer already exists")
    )
)]
pub async fn create_customer(
    Extension(state): Extension<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state.di_container.customer_service.create(&req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customer",
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let data = state
        .di_container
        .customer_service
        .update(&id, &req)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(data))))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customer",
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    state.di_container.customer_service.delete(&id).await?;

    Ok((StatusCode::OK, Json(json!({ "data": { "id": id } }))))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin_routes = OpenApiRouter::new()
        .route("/api/customers", post(create_customer))
        .route("/api/customers/{id}", put(update_customer))
        .route("/api/customers/{id}", delete(delete_customer))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    OpenApiRouter::new()
        .route("/api/customers", get(get_customers))
        .route("/api/customers/{id}", get(get_customer))
        .merge(admin_routes)
        .layer(Extension(app_state))
}
