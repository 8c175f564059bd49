//! In-Memory Cache Store
//!
//! HashMap-backed store with TTL expiry. Used in tests and for running the
//! proxy without a Redis server.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStore, MAX_VALUE_SIZE};
use crate::error::StoreError;

// == Memory Store ==
/// Process-local cache store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Number of entries held, including ones that expired but were not yet
    /// purged.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    #[cfg(test)]
    pub(crate) async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        purge(&mut entries, Instant::now())
    }

    /// Stores a raw payload without size checks. Tests use this to plant
    /// values a well-behaved writer would never produce.
    pub async fn insert_raw(&self, key: &str, value: &[u8], ttl: Duration) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
    }
}

fn purge(entries: &mut HashMap<String, CacheEntry>, now: Instant) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired_at(now));
    before - entries.len()
}

#[async_trait]
impl CacheStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), StoreError> {
        if value.len() > MAX_VALUE_SIZE {
            return Err(StoreError::Rejected(format!(
                "value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let mut entries = self.entries.write().await;
        let removed = purge(&mut entries, Instant::now());
        if removed > 0 {
            debug!("Memory store purged {} expired entries", removed);
        }
        entries.insert(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }
}
