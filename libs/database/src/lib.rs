//! Database connectors for the catalog services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction and health checks
//! - `config` - `core_config::FromEnv` support for connection settings
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
//! let client = connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
