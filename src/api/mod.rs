//! API Module
//!
//! HTTP handlers and routing for the geocoding proxy.
//!
//! # Endpoints
//! - `GET /api?q=<text>` - Look up places matching a text query
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
