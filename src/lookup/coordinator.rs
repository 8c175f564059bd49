//! Lookup Coordinator
//!
//! Cache-aside read-through over a [`CacheStore`] and a [`Geocoder`].

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::error::{LookupError, Result, StoreError};
use crate::models::ResultSet;
use crate::upstream::Geocoder;

/// How long a fetched result set stays in the cache.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10);

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    /// Places in provider relevance order
    pub places: ResultSet,
    /// True iff `places` was read from the cache on this call
    pub cache_hit: bool,
}

/// Decides between cache and upstream for each query.
///
/// Holds no per-request state; clones share the same store and geocoder.
#[derive(Clone)]
pub struct Lookup {
    store: Arc<dyn CacheStore>,
    geocoder: Arc<dyn Geocoder>,
    ttl: Duration,
}

impl Lookup {
    /// Creates a coordinator caching results for [`DEFAULT_TTL`].
    pub fn new(store: Arc<dyn CacheStore>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            store,
            geocoder,
            ttl: DEFAULT_TTL,
        }
    }

    /// Overrides the entry lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Lifetime given to entries written on a miss.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Resolves `query`, serving from the cache when an entry is present.
    ///
    /// The query is used verbatim as the cache key and as the upstream search
    /// text. On a miss the fresh result set is written back before it is
    /// returned; if that write fails the lookup fails too.
    ///
    /// Dropping the returned future cancels whichever I/O step is in flight.
    pub async fn lookup(&self, query: &str) -> Result<LookupOutcome> {
        let cached = self
            .store
            .get(query)
            .await
            .map_err(LookupError::CacheUnavailable)?;

        if let Some(payload) = cached {
            let places: ResultSet =
                serde_json::from_slice(&payload).map_err(|source| LookupError::CacheCorruption {
                    key: query.to_string(),
                    source,
                })?;
            debug!(
                store = self.store.name(),
                "Cache hit for {:?} ({} places)",
                query,
                places.len()
            );
            return Ok(LookupOutcome {
                places,
                cache_hit: true,
            });
        }

        debug!(store = self.store.name(), "Cache miss for {:?}", query);
        let places = self.geocoder.search(query).await.map_err(|err| {
            warn!("Upstream lookup for {:?} failed: {}", query, err);
            LookupError::from(err)
        })?;

        let payload = serde_json::to_vec(&places).map_err(|err| LookupError::CacheWrite {
            key: query.to_string(),
            source: StoreError::Rejected(format!("payload encoding failed: {}", err)),
        })?;

        self.store
            .set(query, &payload, self.ttl)
            .await
            .map_err(|source| LookupError::CacheWrite {
                key: query.to_string(),
                source,
            })?;

        Ok(LookupOutcome {
            places,
            cache_hit: false,
        })
    }
}
