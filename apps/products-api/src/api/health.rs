//! Readiness endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};

use crate::state::AppState;

/// `GET /ready`: 200 when MongoDB answers a ping, 503 otherwise
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(database::mongodb::check_health(&state.mongo_client)),
    )];
    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
