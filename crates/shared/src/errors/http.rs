use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String, Option<Value>),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Username/email or password is incorrect".to_string())
            }

            ServiceError::Validation { message, details } => {
                HttpError::BadRequest(message, details)
            }

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Conflict(msg) => HttpError::Conflict(msg),

            // Transaction/constraint failures surface as 400 with the
            // underlying cause string, never as a partial write.
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"), None)
                }
                RepositoryError::Sqlx(err) => {
                    HttpError::BadRequest("Database operation failed".into(), Some(Value::String(err.to_string())))
                }
                RepositoryError::Custom(msg) => HttpError::BadRequest(msg, None),
            },

            ServiceError::Jwt(_) => HttpError::Unauthorized("Invalid session".into()),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::BadRequest(msg, Some(details)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(msg, details),
            ),
            HttpError::BadRequest(msg, None) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg)),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorResponse::new(msg)),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, ErrorResponse::new(msg)),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg)),
        };

        (status, Json(body)).into_response()
    }
}
