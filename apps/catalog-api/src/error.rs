//! # API Error Type
//!
//! What HTTP clients see when a request fails, and the translation from
//! orchestrator errors into it.
//!
//! ## Error Translation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in catalog-api                            │
//! │                                                                         │
//! │  Handler                                                               │
//! │  ApiResult<T>                                                          │
//! │       │                                                                 │
//! │       ├── bad path id / bad JSON / field rule ── ValidationError ──┐   │
//! │       │                                                            │   │
//! │       ▼                                                            ▼   │
//! │  ProductOrchestrator ── CoreError ──────────────────────────► ApiError │
//! │                                                                    │   │
//! │   CoreError::ProductNotFound ──► 404 NOT_FOUND                     │   │
//! │   CoreError::OptionNotFound  ──► 404 NOT_FOUND                     │   │
//! │   CoreError::Validation      ──► 400 VALIDATION_ERROR              │   │
//! │   CoreError::Store           ──► 500 INTERNAL  (logged, generic)   │   │
//! │                                                                    ▼   │
//! │                              {"code": "...", "message": "..."}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal failures never leak their cause to the client; it goes to the
//! log at error level instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::{CoreError, ValidationError};
use serde::Serialize;
use ts_rs::TS;

/// Message returned for every internal failure.
pub const INTERNAL_MESSAGE: &str = "An internal error occurred.";

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product was not found."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error with the generic message.
    pub fn internal() -> Self {
        ApiError::new(ErrorCode::Internal, INTERNAL_MESSAGE)
    }
}

/// Translates orchestrator errors into API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound { .. } | CoreError::OptionNotFound { .. } => {
                ApiError::not_found(err.to_string())
            }
            CoreError::Validation(e) => ApiError::from(e),
            CoreError::Store(e) => {
                // Log the actual error but return a generic message
                tracing::error!(error = %e, "Store operation failed");
                ApiError::internal()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::StoreError;
    use uuid::Uuid;

    #[test]
    fn test_not_found_kinds_keep_their_messages() {
        let product = ApiError::from(CoreError::ProductNotFound { id: Uuid::new_v4() });
        assert_eq!(product, ApiError::not_found("Product was not found."));

        let option = ApiError::from(CoreError::OptionNotFound { id: Uuid::new_v4() });
        assert_eq!(option, ApiError::not_found("Option was not found."));
        assert_eq!(option.code.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failures_are_internal_and_opaque() {
        let err = ApiError::from(CoreError::Store(StoreError::Backend(
            "disk I/O error at /var/lib/catalog.db".to_string(),
        )));

        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(err.message, INTERNAL_MESSAGE);
        assert_eq!(err.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(CoreError::Validation(ValidationError::MustBePositive {
            field: "price".to_string(),
        }));

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "price must be greater than 0");
    }

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_value(ApiError::not_found("Product was not found.")).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product was not found.");
    }
}
