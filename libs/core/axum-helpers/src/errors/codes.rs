//! Error codes carried in every `ErrorResponse`.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier for clients, an integer for
//! logs and dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
//! assert_eq!(ErrorCode::ValidationError.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Business validation rejected the request
    ValidationError,
    /// Request body could not be extracted as JSON
    JsonExtraction,
    /// Query string could not be deserialized
    InvalidQuery,
    NotFound,

    // Server errors
    InternalError,
    ServiceUnavailable,

    // Database errors (2000-2999)
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// 1000-1999 are request/server errors, 2000-2999 database errors.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::InvalidQuery => 1010,
            Self::ServiceUnavailable => 1011,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::JsonExtraction => "Failed to parse request body",
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
