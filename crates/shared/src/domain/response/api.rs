use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope: every 2xx body is `{"data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
