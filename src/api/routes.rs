//! API Routes
//!
//! Configures the Axum router with the geocoding proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{health_handler, lookup_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api?q=<text>` - Look up places matching a text query
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Timeout: requests exceeding `state.request_timeout` get 408 and their
///   in-flight cache/upstream I/O is dropped
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(state.request_timeout);

    Router::new()
        .route("/api", get(lookup_handler))
        .route("/health", get(health_handler))
        .layer(timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
