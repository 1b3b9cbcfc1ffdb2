//! Shared Cache Module
//!
//! Thread-safe handle around [`LruCache`] for use across tasks.

use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheKey, CacheStats, LruCache};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable, task-safe handle to a single [`LruCache`].
///
/// Index and recency list sit behind one mutex, so callers never observe a
/// key in one without the other.
#[derive(Debug)]
pub struct SharedCache<T> {
    inner: Arc<Mutex<LruCache<T>>>,
}

impl<T> Clone for SharedCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Hash + Clone> SharedCache<T> {
    /// Creates a shared cache holding at most `capacity` entries.
    pub fn new(capacity: i64) -> Result<Self> {
        Ok(Self::from_cache(LruCache::new(capacity)?))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LruCache<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// See [`LruCache::put`].
    pub async fn put(&self, value: T) -> CacheKey {
        self.inner.lock().await.put(value)
    }

    /// See [`LruCache::get`]. Returns a clone since the lock is released
    /// before the caller sees the value.
    pub async fn get(&self, key: CacheKey) -> Result<T> {
        self.inner.lock().await.get(key).cloned()
    }

    pub async fn contains(&self, key: CacheKey) -> bool {
        self.inner.lock().await.contains(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    #[tokio::test]
    async fn test_shared_put_and_get() {
        let cache = SharedCache::new(4).unwrap();

        let key = cache.put("value".to_string()).await;

        assert_eq!(cache.get(key).await.unwrap(), "value");
        assert!(cache.contains(key).await);
        assert_eq!(cache.len().await, 1);
    }

    #[test]
    fn test_shared_invalid_capacity() {
        let result = SharedCache::<String>::new(0);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
    }

    #[test]
    fn test_usable_from_blocking_context() {
        let cache = SharedCache::new(1).unwrap();

        let key = tokio_test::block_on(cache.put('x'));

        assert_eq!(tokio_test::block_on(cache.get(key)), Ok('x'));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = SharedCache::new(2).unwrap();
        let other = cache.clone();

        let key = other.put(7u64).await;

        assert_eq!(cache.get(key).await.unwrap(), 7);
        assert_eq!(cache.stats().await.hits, 1);
        assert!(!other.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_puts_respect_capacity() {
        let cache = SharedCache::new(8).unwrap();

        let handles: Vec<_> = (0..16u64)
            .map(|worker| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    for i in 0..50u64 {
                        let key = cache.put(worker * 1000 + i).await;
                        let _ = cache.get(key).await;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let stats = cache.stats().await;
        assert_eq!(cache.len().await, 8);
        assert_eq!(stats.inserts, 16 * 50);
        assert_eq!(stats.evictions, 16 * 50 - 8);
    }
}
