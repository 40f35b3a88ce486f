use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors};

/// JSON extractor that runs the request's `validator` rules and rejects
/// with the `{error:{message, details}}` envelope on failure.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                (
                    rejection.status(),
                    Json(ErrorResponse::new(format!(
                        "Invalid JSON: {}",
                        rejection.body_text()
                    ))),
                )
            })?;

        value.validate().map_err(|validation_errors| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_details(
                    summarize_errors(&validation_errors),
                    field_details(&validation_errors),
                )),
            )
        })?;

        Ok(Self(value))
    }
}

fn summarize_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "email" => "Invalid email format".to_string(),
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

fn field_details(errors: &ValidationErrors) -> Value {
    let mut map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let codes: Vec<Value> = field_errors
            .iter()
            .map(|e| Value::String(e.code.to_string()))
            .collect();
        map.insert(field.to_string(), Value::Array(codes));
    }

    Value::Object(map)
}
