use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::security_headers;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Parse a comma-separated origin list, ignoring blanks.
pub fn parse_allowed_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(origins)
}

/// CORS layer for the origins listed in `CORS_ALLOWED_ORIGIN` (required).
fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let raw = std::env::var("CORS_ALLOWED_ORIGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required. Example: CORS_ALLOWED_ORIGIN=http://localhost:3000",
        )
    })?;
    let origins = parse_allowed_origins(&raw)?;

    info!("CORS configured with allowed origins: {}", raw);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600)))
}

/// Wrap `apis` with documentation and cross-cutting middleware.
///
/// - `apis` nested under `/api` (routers arrive with their state applied)
/// - Swagger UI at `/swagger-ui` (document at `/api-docs/openapi.json`), Scalar at `/scalar`
/// - JSON 404 fallback
/// - request tracing, security headers, CORS and response compression
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is missing, empty or not a valid header value.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` bounded by `shutdown_timeout`.
///
/// ```ignore
/// create_production_app(app, &config.server, Duration::from_secs(30), async move {
///     drop(mongo_client);
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let signal_coordinator = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // Serve errors skip the signal path; make sure cleanup still runs.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
