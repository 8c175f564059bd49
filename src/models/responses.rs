//! Response DTOs for the geocoding API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::lookup::LookupOutcome;
use crate::models::PlaceRecord;

/// Response body for a successful lookup (GET /api)
///
/// `cache` reports whether `data` was served from the cache store.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    pub cache: bool,
    pub data: Vec<PlaceRecord>,
}

impl From<LookupOutcome> for LookupResponse {
    fn from(outcome: LookupOutcome) -> Self {
        Self {
            cache: outcome.cache_hit,
            data: outcome.places,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::fixtures::eiffel_tower;

    #[test]
    fn test_lookup_response_shape() {
        let resp = LookupResponse::from(LookupOutcome {
            places: vec![eiffel_tower()],
            cache_hit: true,
        });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["cache"], true);
        assert_eq!(json["data"][0]["place_id"], 12345);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_lookup_response() {
        let resp = LookupResponse::from(LookupOutcome {
            places: vec![],
            cache_hit: false,
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"cache":false,"data":[]}"#);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
