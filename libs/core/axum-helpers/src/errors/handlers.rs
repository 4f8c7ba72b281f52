use axum::response::{IntoResponse, Response};

use super::AppError;

/// Router fallback: JSON 404 for unknown paths.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}
