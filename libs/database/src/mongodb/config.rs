#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or};

const DEFAULT_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "catalog";
const DEFAULT_MAX_POOL_SIZE: u32 = 100;
const DEFAULT_MIN_POOL_SIZE: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

/// MongoDB connection settings
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog")
///     .with_app_name("products-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/db][?options]`
    pub url: String,
    pub database: String,
    /// Reported to the server in its logs
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn with_pool_size(
        url: impl Into<String>,
        database: impl Into<String>,
        max_pool_size: u32,
        min_pool_size: u32,
    ) -> Self {
        Self {
            max_pool_size,
            min_pool_size,
            ..Self::with_database(url, database)
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        }
    }
}

/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (required)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required)
/// - `MONGODB_APP_NAME`
/// - `MONGODB_MAX_POOL_SIZE` (default 100), `MONGODB_MIN_POOL_SIZE` (default 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .map_err(|_| {
                ConfigError::MissingEnvVar("MONGODB_DATABASE or MONGO_DATABASE".to_string())
            })?;

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", DEFAULT_MAX_POOL_SIZE)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", DEFAULT_MIN_POOL_SIZE)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_new_keeps_defaults() {
        let config = MongoConfig::new("mongodb://db:27017");
        assert_eq!(config.url(), "mongodb://db:27017");
        assert_eq!(config.database(), "catalog");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
    }

    #[test]
    fn test_mongo_config_with_pool_size() {
        let config = MongoConfig::with_pool_size("mongodb://localhost:27017", "shop", 50, 10);
        assert_eq!(config.database(), "shop");
        assert_eq!(config.max_pool_size, 50);
        assert_eq!(config.min_pool_size, 10);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_fallback_names() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", Some("mongodb://fallback:27017")),
                ("MONGODB_DATABASE", None::<&str>),
                ("MONGO_DATABASE", Some("fallbackdb")),
                ("MONGODB_MAX_POOL_SIZE", Some("12")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://fallback:27017");
                assert_eq!(config.database, "fallbackdb");
                assert_eq!(config.max_pool_size, 12);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_missing_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None::<&str>),
                ("MONGODB_DATABASE", Some("catalog")),
            ],
            || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_URL"));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_bad_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("catalog")),
                ("MONGODB_MAX_POOL_SIZE", Some("lots")),
            ],
            || {
                assert!(matches!(
                    MongoConfig::from_env(),
                    Err(ConfigError::ParseError { .. })
                ));
            },
        );
    }
}
