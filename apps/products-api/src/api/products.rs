//! Products API routes

use axum::Router;
use domain_products::{handlers, MongoProductGateway, ProductController};

use crate::state::AppState;

fn gateway(state: &AppState) -> MongoProductGateway {
    MongoProductGateway::with_collection(&state.db, &state.config.products_collection)
}

/// Create products router
pub fn router(state: &AppState) -> Router {
    handlers::router(ProductController::new(gateway(state)))
}

/// Initialize products indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    gateway(state).init_indexes().await?;
    Ok(())
}
