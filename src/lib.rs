//! Geocache - A cache-aside geocoding proxy
//!
//! Answers free-text place queries from a short-lived Redis cache, falling
//! through to a Nominatim instance on a miss and writing the result back.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use lookup::{Lookup, LookupOutcome};
