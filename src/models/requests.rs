//! Request DTOs for the geocoding API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for `GET /api`
///
/// `q` is used verbatim as both the cache key and the upstream search text.
/// A missing parameter is the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupParams {
    /// Free-text place query
    #[serde(default)]
    pub q: String,
}
