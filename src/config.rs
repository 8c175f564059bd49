//! Configuration Module
//!
//! Handles loading server configuration. Only the Redis address comes from the
//! environment; everything else is fixed at its default.

use std::env;
use std::time::Duration;

use crate::lookup::DEFAULT_TTL;

/// Port Redis listens on when `REDIS_URL` names a bare host
pub const REDIS_PORT: u16 = 6379;

/// Public Nominatim instance
pub const DEFAULT_UPSTREAM_URL: &str = "https://nominatim.openstreetmap.org";

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL of the Redis cache store
    pub redis_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the Nominatim instance
    pub upstream_url: String,
    /// User-Agent sent to the upstream provider
    pub user_agent: String,
    /// Lifetime of cached result sets
    pub cache_ttl: Duration,
    /// Deadline for one inbound request, cache and upstream I/O included
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new Config, reading the cache store address from the
    /// environment.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis host, or a full `redis://` URL (default: 127.0.0.1)
    pub fn from_env() -> Self {
        let redis_url = env::var("REDIS_URL")
            .ok()
            .map(|v| redis_url_from(&v))
            .unwrap_or_else(|| Self::default().redis_url);

        Self {
            redis_url,
            ..Self::default()
        }
    }
}

/// Expands a bare host to `redis://<host>:6379`; full URLs pass through.
pub fn redis_url_from(value: &str) -> String {
    let value = value.trim();
    if value.contains("://") {
        value.to_string()
    } else if value.is_empty() {
        format!("redis://127.0.0.1:{}", REDIS_PORT)
    } else {
        format!("redis://{}:{}", value, REDIS_PORT)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: redis_url_from(""),
            server_port: 8000,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            cache_ttl: DEFAULT_TTL,
            request_timeout: Duration::from_secs(10),
        }
    }
}
