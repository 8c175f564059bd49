//! Cache Store Trait
//!
//! The narrow interface the lookup coordinator uses to reach a cache backend.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;

// == Cache Store ==
/// Key/value store with per-entry expiry.
///
/// Implementations must keep three outcomes apart on `get`: a miss
/// (`Ok(None)`), a stored value (`Ok(Some(_))`, possibly empty), and a
/// backend failure (`Err`). Once an entry's TTL has elapsed it reads as a
/// miss. Values are raw bytes that stores never interpret, so a payload that
/// is not valid UTF-8 still comes back as a value.
///
/// Stores are shared by every in-flight lookup, so they must be safe to use
/// concurrently through `&self`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Returns the value stored under `key`, or `None` on a miss.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Stores `value` under `key`, replacing any previous entry, expiring
    /// after `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), StoreError>;
}
