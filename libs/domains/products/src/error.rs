use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                AppError::NotFound(format!("Product with id {} not found", id))
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(msg) => AppError::Database(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ProductError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ProductError::Internal(format!("Failed to encode product: {}", err))
    }
}
