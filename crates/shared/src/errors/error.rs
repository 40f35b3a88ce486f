use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Wire shape of every failure: `{"error": {"message": "...", "details": ...}}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(message: impl Into<String>, details: Value) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                details: Some(details),
            },
        }
    }
}
