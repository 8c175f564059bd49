//! Upstream Module
//!
//! The geocoding provider the proxy falls through to on a cache miss.

mod nominatim;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::models::ResultSet;

pub use nominatim::NominatimClient;

/// A geocoding provider resolving free-text queries to place records.
///
/// Results come back in provider relevance order. An empty set is a valid
/// answer, not an error.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, query: &str) -> Result<ResultSet, UpstreamError>;
}
