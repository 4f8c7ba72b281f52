//! # Axum Helpers
//!
//! Shared building blocks for the catalog's Axum services.
//!
//! - **[`errors`]**: `AppError` and the JSON `ErrorResponse` envelope
//! - **[`extractors`]**: JSON body and query extractors that reject through `AppError`
//! - **[`http`]**: security header middleware
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes).await?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{AppJson, AppQuery};
pub use http::security_headers;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
