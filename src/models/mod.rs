//! Data models for the geocoding proxy
//!
//! Place records shared by the upstream client, the cache payload and the
//! HTTP API, plus the request/response DTOs of the API itself.

pub mod place;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use place::{PlaceRecord, ResultSet};
pub use requests::LookupParams;
pub use responses::{HealthResponse, LookupResponse};
