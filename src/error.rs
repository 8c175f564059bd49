//! Error types for the geocoding proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Upstream Error Enum ==
/// Failures talking to the upstream geocoding provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The search URL could not be built from the configured base
    #[error("invalid upstream url: {0}")]
    Url(#[from] url::ParseError),

    /// Connection, TLS or timeout failure
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    /// Body exceeded the size limit
    #[error("upstream response exceeds {0} bytes")]
    TooLarge(usize),

    /// Body was not a JSON array of place records
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] serde_json::Error),
}

// == Store Error Enum ==
/// Failures reported by a cache store backend.
///
/// A clean miss is never an error; stores return `Ok(None)` for that.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Redis connectivity or command failure
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// The store refused the operation
    #[error("store rejected operation: {0}")]
    Rejected(String),
}

// == Lookup Error Enum ==
/// Terminal failure of a single lookup. None of these are retried.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Upstream provider could not be reached or returned garbage
    #[error("upstream provider error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Cache read failed for a reason other than a miss
    #[error("cache unavailable: {0}")]
    CacheUnavailable(#[source] StoreError),

    /// Cached payload did not deserialize into a result set
    #[error("cached entry for {key:?} is corrupt: {source}")]
    CacheCorruption {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Fresh data was fetched but could not be written back
    #[error("failed to write cache entry for {key:?}: {source}")]
    CacheWrite {
        key: String,
        #[source]
        source: StoreError,
    },
}

impl LookupError {
    /// HTTP status reported to callers for this failure kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::Upstream(_) => StatusCode::BAD_GATEWAY,
            LookupError::CacheUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            LookupError::CacheCorruption { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            LookupError::CacheWrite { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for lookups.
pub type Result<T> = std::result::Result<T, LookupError>;
