use crate::middleware::{ValidatedJson, auth_middleware};
use axum::{
    Extension, Json, http::StatusCode, middleware, response::IntoResponse, routing::get,
    routing::post,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use shared::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        response::{ApiResponse, AuthUser},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use time::Duration;
use utoipa_axum::router::OpenApiRouter;

fn session_cookie(name: &str, token: String) -> Cookie<'static> {
    Cookie::build((name.to_string(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(7))
        .build()
}

fn expired_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AuthUser>),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Identifier already taken")
    )
)]
pub async fn register_user_handler(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let (user, token) = state.di_container.auth_service.register(&req).await?;

    let jar = jar.add(session_cookie(&state.cookie_name, token));

    Ok((StatusCode::CREATED, jar, Json(ApiResponse::new(user))))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<AuthUser>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login_user_handler(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let (user, token) = state.di_container.auth_service.login(&req).await?;

    let jar = jar.add(session_cookie(&state.cookie_name, token));

    Ok((StatusCode::OK, jar, Json(ApiResponse::new(user))))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current session", body = ApiResponse<AuthUser>),
        (status = 401, description = "No valid session")
    )
)]
pub async fn get_me_handler(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(ApiResponse::new(user))))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Session cleared")
    )
)]
pub async fn logout_user_handler(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, HttpError> {
    let jar = jar.add(expired_cookie(&state.cookie_name));

    Ok((StatusCode::OK, jar, Json(json!({ "data": { "ok": true } }))))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let session_routes = OpenApiRouter::new()
        .route("/api/auth/me", get(get_me_handler))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    OpenApiRouter::new()
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/login", post(login_user_handler))
        .route("/api/auth/logout", post(logout_user_handler))
        .merge(session_routes)
        .layer(Extension(app_state))
}
