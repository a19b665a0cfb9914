//! Error response body

use axum::{http::StatusCode, Json};
use serde::Serialize;
use shopscout::DomainError;
use utoipa::ToSchema;

/// `{"error": "..."}`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Query parameter is required")]
    pub error: String,
}

/// Error half of every handler's return type
pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self::new(err.to_string())
    }
}

/// Validation errors map to 400, everything else to 500
pub fn api_error(err: DomainError) -> ApiError {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(err.into()))
}
