//! API Handlers
//!
//! HTTP request handlers for the geocoding proxy endpoints.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{error, info};

use crate::cache::RedisStore;
use crate::config::Config;
use crate::error::Result;
use crate::lookup::Lookup;
use crate::models::{HealthResponse, LookupParams, LookupResponse};
use crate::upstream::NominatimClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside coordinator
    pub lookup: Lookup,
    /// Deadline applied to every request
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState around a lookup coordinator.
    pub fn new(lookup: Lookup) -> Self {
        Self {
            lookup,
            request_timeout: Config::default().request_timeout,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens the Redis connection and builds the Nominatim client. The
    /// connection lives as long as the returned state.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = RedisStore::connect(&config.redis_url)
            .await
            .with_context(|| format!("failed to connect to Redis at {}", config.redis_url))?;

        let geocoder = NominatimClient::new(
            &config.upstream_url,
            &config.user_agent,
            config.request_timeout,
        )
        .context("failed to build upstream client")?;

        let lookup = Lookup::new(Arc::new(store), Arc::new(geocoder)).with_ttl(config.cache_ttl);
        info!(
            "Caching {} results for {:?}",
            config.upstream_url,
            lookup.ttl()
        );
        Ok(Self::new(lookup).with_request_timeout(config.request_timeout))
    }
}

/// Handler for GET /api?q=<text>
///
/// Resolves the query through the cache, falling back to the upstream
/// provider on a miss.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupResponse>> {
    let outcome = state.lookup.lookup(&params.q).await.map_err(|err| {
        error!("Lookup for {:?} failed: {}", params.q, err);
        err
    })?;

    Ok(Json(LookupResponse::from(outcome)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
