/// Error raised while establishing or probing a database connection
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level MongoDB failure (bad URI, DNS, auth handshake)
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The client was built but the server did not answer the ping
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health probe failed on an already established connection
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
