//! Cache Module
//!
//! Provides a hash-keyed in-memory cache with LRU eviction.

mod entry;
mod key;
mod lru;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{CacheKey, DefaultKeyBuilder};
pub use lru::{RecencyList, Slot};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::LruCache;
