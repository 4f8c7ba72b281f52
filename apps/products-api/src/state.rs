//! Shared handles built once at startup

use mongodb::{Client, Database};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    /// Catalog database named by `MONGODB_DATABASE`
    pub db: Database,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        Self {
            config,
            mongo_client,
            db,
        }
    }
}
