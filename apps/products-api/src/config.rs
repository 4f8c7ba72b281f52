//! Configuration for Products API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;
use domain_products::mongodb::DEFAULT_COLLECTION;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `PRODUCTS_COLLECTION`, defaults to `products`
    pub products_collection: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(app.name);
        }
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            products_collection: env_or_default("PRODUCTS_COLLECTION", DEFAULT_COLLECTION),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("catalog")),
                ("MONGODB_APP_NAME", None),
                ("PRODUCTS_COLLECTION", None),
                ("PORT", None),
                ("APP_ENV", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.products_collection, "products");
                assert_eq!(config.server.port, 3003);
                assert_eq!(config.mongodb.app_name.as_deref(), Some("products_api"));
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_config_from_env_custom_collection() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("catalog")),
                ("PRODUCTS_COLLECTION", Some("menu_items")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.products_collection, "menu_items");
            },
        );
    }

    #[test]
    fn test_config_requires_mongodb_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB_DATABASE", Some("catalog")),
            ],
            || assert!(Config::from_env().is_err()),
        );
    }
}
