pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// JSON body returned for every error.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product with id 42 not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type rendered as an [`ErrorResponse`].
///
/// Domain crates convert their own errors into this type; handlers return it
/// (directly or through the domain error's `IntoResponse`).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Status and code this error renders with
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::JsonExtractorRejection(e) => (e.status(), ErrorCode::JsonExtraction),
            AppError::QueryExtractorRejection(e) => (e.status(), ErrorCode::InvalidQuery),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::ValidationError),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError),
            AppError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
            AppError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::ServiceUnavailable)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                e.body_text()
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "Query extraction error: {:?}", e);
                e.body_text()
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg
            }
            AppError::Database(msg) => {
                // Driver messages stay in the logs, clients get the generic text.
                tracing::error!(error_code = code.code(), "Database error: {}", msg);
                code.default_message().to_string()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                msg
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error_code = code.code(), "Service unavailable: {}", msg);
                msg
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let (status, body) = render(AppError::NotFound("Product with id 9 not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 1004);
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Product with id 9 not found");
    }

    #[tokio::test]
    async fn test_bad_request_is_validation_error() {
        let (status, body) = render(AppError::BadRequest("price must be positive".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_message() {
        let (status, body) =
            render(AppError::Database("auth failed for mongodb://root:pw@db".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, ErrorCode::DatabaseError.default_message());
        assert!(body.details.is_none());
    }
}
