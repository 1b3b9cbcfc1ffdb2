//! Hash LRU - A fixed-capacity in-memory cache
//!
//! Values are stored under the hash of their content and evicted in
//! least-recently-used order once capacity is exceeded.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheKey, CacheStats, LruCache, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
