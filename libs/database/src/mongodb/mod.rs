//! MongoDB client construction and health probes

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{client_options, connect_from_config};
pub use health::{check_health, ping};

pub use mongodb::{Client, Collection, Database};
