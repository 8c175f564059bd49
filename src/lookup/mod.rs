//! Lookup Module
//!
//! Cache-aside coordination between the cache store and the upstream
//! geocoder.

mod coordinator;


pub use coordinator::{Lookup, LookupOutcome, DEFAULT_TTL};
