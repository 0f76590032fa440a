//! # PDP Dashboard HTTP Module
//!
//! This module implements the HTTP server using axum.
//!
//! ## Endpoints
//!
//! - `GET /` - HTML dashboard (`?stakeholder=<name>`)
//! - `GET /stakeholders` - Selector options
//! - `GET /render/{stakeholder}` - Render plan as JSON
//! - `GET /audit` - Catalog audit
//! - `GET /health` - Health check
//! - `GET /pdps/<file>` - PDP images
//!
//! ## Configuration (Environment Variables)
//!
//! - `PDP_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `PDP_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)

mod handlers;
mod middleware;
pub mod page;
mod types;

// Re-exports for external use
pub use middleware::{create_rate_limiter, get_rate_limit_from_env};
// Re-export handlers and types for integration tests (via `pdp_dashboard::api::*`)
#[allow(unused_imports)]
pub use handlers::{
    audit_handler, health_handler, page_handler, render_handler, stakeholders_handler,
};
#[allow(unused_imports)]
pub use types::{ErrorResponse, HealthResponse, PageQuery, StakeholdersResponse};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::get,
};
use pdp_core::{DashboardError, FsProbe, Renderer};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state. Immutable, so no locking.
#[derive(Clone)]
pub struct AppState {
    /// Catalogs and resolver.
    pub renderer: Arc<Renderer>,
    /// Existence check against the asset directory.
    pub probe: FsProbe,
}

impl AppState {
    /// Create new app state with a renderer.
    #[must_use]
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
            probe: FsProbe,
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Browser origins allowed to embed the dashboard's JSON and images.
///
/// `PDP_CORS_ORIGINS` is either `*` or a comma-separated origin list.
/// Unset, or a list with no parsable origin, means the local dashboard ports.
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("PDP_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins (PDP_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in PDP_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE])
            }
        }
        None => {
            tracing::info!("CORS: No PDP_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// The dashboard's own port (8501) and a local frontend dev server (3000).
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:8501",
        "http://127.0.0.1:8501",
        "http://localhost:3000",
        "http://127.0.0.1:3000",
    ]
    .into_iter()
    .filter_map(|origin| origin.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Dashboard routes, PDP file serving and middleware.
///
/// Requests pass tracing, then CORS, then the request budget. Image
/// requests under `/pdps` are budgeted like pages.
pub fn create_router(state: AppState) -> Router {
    let rate_limit = get_rate_limit_from_env();
    let rate_limiter = if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        Some(create_rate_limiter(rate_limit))
    } else {
        tracing::info!("Rate limiting disabled");
        None
    };

    let assets = ServeDir::new(state.renderer.resolver().dir());

    let mut router = Router::new()
        .route("/", get(handlers::page_handler))
        .route("/health", get(handlers::health_handler))
        .route("/stakeholders", get(handlers::stakeholders_handler))
        .route("/render/{stakeholder}", get(handlers::render_handler))
        .route("/audit", get(handlers::audit_handler))
        .nest_service(page::ASSET_ROUTE, assets);

    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer()),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, renderer: Renderer) -> Result<(), DashboardError> {
    let state = AppState::new(renderer);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| DashboardError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("PDP dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DashboardError::IoError(format!("Server error: {}", e)))
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
