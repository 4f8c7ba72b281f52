//! Products API - REST server for the product catalog

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let state = AppState::new(config, mongo_client);

    info!(
        "Successfully connected to MongoDB database: {}",
        state.db.name()
    );

    api::init_indexes(&state).await?;

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!(
        "Products API listening on {}",
        state.config.server.address()
    );

    let AppState {
        config,
        mongo_client,
        ..
    } = state;

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
