use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::{MongoConfig, health::ping};
use crate::common::{DatabaseError, DatabaseResult};

/// Parse the connection string and apply pool, timeout and app-name settings.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client from `config` and verify it with a ping.
///
/// A single attempt is made; a failed ping surfaces as
/// [`DatabaseError::ConnectionFailed`].
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!(database = %config.database, "Connecting to MongoDB");

    let options = client_options(config).await?;
    let client = Client::with_options(options)?;

    ping(&client)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_options_apply_config() {
        let config = MongoConfig::with_pool_size("mongodb://localhost:27017", "catalog", 20, 2)
            .with_app_name("products-api");

        let options = client_options(&config).await.unwrap();
        assert_eq!(options.max_pool_size, Some(20));
        assert_eq!(options.min_pool_size, Some(2));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(10)));
        assert_eq!(options.app_name.as_deref(), Some("products-api"));
    }

    #[tokio::test]
    async fn test_client_options_reject_bad_scheme() {
        let config = MongoConfig::new("postgres://localhost:5432");
        assert!(matches!(
            client_options(&config).await,
            Err(DatabaseError::Mongo(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect_from_config() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "test");
        assert!(connect_from_config(&config).await.is_ok());
    }
}
