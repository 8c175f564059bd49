//! Cache Module
//!
//! The cache store interface used by the lookup coordinator, plus its Redis
//! and in-memory backends.

mod entry;
mod memory;
mod redis_store;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum payload size the in-memory store accepts, in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
