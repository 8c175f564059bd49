//! Place Record Model
//!
//! One geocoded match as returned by the upstream provider. The same shape is
//! stored in the cache and sent back to API callers, so field names follow the
//! provider's JSON exactly.

use serde::{Deserialize, Serialize};

/// A single geocoded place.
///
/// Coordinates stay as decimal strings so no precision is lost between the
/// provider, the cache and the caller.
///
/// Nominatim leaves out the OSM reference for results with no OSM object
/// (postcodes, TIGER house numbers) and the bounding box when it has none.
/// Those fields are optional and are omitted again when serialized, so a
/// cached record reads back exactly as it was fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Provider-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<u64>,
    /// Data licence attribution
    pub licence: String,
    /// OSM feature type ("node", "way", "relation")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
    /// OSM feature identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<u64>,
    pub lat: String,
    pub lon: String,
    /// Classification key, e.g. "tourism"
    pub class: String,
    /// Classification value, e.g. "attraction"
    #[serde(rename = "type")]
    pub kind: String,
    pub place_rank: i32,
    /// Provider-defined relevance score
    pub importance: f64,
    pub addresstype: String,
    pub name: String,
    pub display_name: String,
    /// South latitude, north latitude, west longitude, east longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundingbox: Option<[String; 4]>,
}

/// Ordered result set, in provider relevance order.
pub type ResultSet = Vec<PlaceRecord>;
