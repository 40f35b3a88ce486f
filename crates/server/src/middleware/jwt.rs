use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{errors::HttpError, state::AppState};
use std::sync::Arc;

/// Resolves the session from the http-only cookie, falling back to a
/// bearer token, and makes the decoded identity available as an
/// `AuthUser` extension.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    cookie_jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = cookie_jar
        .get(&state.cookie_name)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = token.ok_or_else(|| {
        HttpError::Unauthorized("You are not signed in, please provide a session".to_string())
    })?;

    let user = state
        .jwt_config
        .verify_session(&token)
        .map_err(|_| HttpError::Unauthorized("Invalid or expired session".to_string()))?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
