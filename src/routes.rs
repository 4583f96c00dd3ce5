//! Top-level router configuration.
//!
//! # Middleware (outermost first)
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin allowed
//! - **Security headers** - `nosniff`, frame options, HSTS, ...
//! - **Error boundary** - Shapes 500 responses by runtime mode
//! - **Panic catcher** - Turns handler panics into faults

use crate::api;
use crate::api::middleware::{error_boundary, security, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
///
/// Exposed separately so tests can drive it directly.
pub fn build_router(state: AppState) -> Router {
    let mode = state.mode;

    let router = api::routes::public_routes()
        .with_state(state)
        .layer(CatchPanicLayer::custom(error_boundary::panic_response))
        .layer(middleware::from_fn_with_state(mode, error_boundary::layer));

    security::with_headers(router)
        .layer(security::cors_layer())
        .layer(tracing::layer(mode))
}

/// Constructs the application service with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
