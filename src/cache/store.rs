//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with an arena-backed recency
//! list for O(1) LRU promotion and eviction.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheKey, CacheStats, DefaultKeyBuilder, RecencyList};
use crate::error::{CacheError, Result};

/// Upper bound on slots reserved up front; larger caches grow on demand.
const PREALLOCATE_LIMIT: usize = 1024;

// == LRU Cache ==
/// Fixed-capacity cache that stores values under the hash of their content.
///
/// Values are admitted with [`put`](Self::put), which returns the
/// [`CacheKey`] to look them up with [`get`](Self::get). Both operations
/// promote the touched entry to most recently used. When an insertion
/// pushes the entry count past capacity, the least recently used entry is
/// evicted.
///
/// Keys are hashes, so two distinct values with the same hash occupy the
/// same entry and the later `put` wins.
#[derive(Debug)]
pub struct LruCache<T, S = DefaultKeyBuilder> {
    /// Key to value and recency slot
    entries: HashMap<CacheKey, CacheEntry<T>>,
    /// Keys from most to least recently used
    order: RecencyList,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Derives keys from values
    hasher: S,
}

impl<T: Hash> LruCache<T> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity <= 0`.
    pub fn new(capacity: i64) -> Result<Self> {
        Self::with_hasher(capacity, DefaultKeyBuilder::default())
    }
}

impl<T: Hash, S: BuildHasher> LruCache<T, S> {
    /// Creates an empty cache that derives keys with `hasher`.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity <= 0`.
    pub fn with_hasher(capacity: i64, hasher: S) -> Result<Self> {
        if capacity <= 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        let capacity =
            usize::try_from(capacity).map_err(|_| CacheError::InvalidCapacity(capacity))?;
        let reserve = capacity.min(PREALLOCATE_LIMIT);

        Ok(Self {
            entries: HashMap::with_capacity(reserve),
            order: RecencyList::with_capacity(reserve),
            stats: CacheStats::new(capacity),
            capacity,
            hasher,
        })
    }

    // == Put ==
    /// Stores `value` under its hash and returns that key.
    ///
    /// An existing entry with the same key has its value replaced. Either
    /// way the entry becomes the most recently used. If the cache overflows,
    /// the least recently used entry is evicted.
    pub fn put(&mut self, value: T) -> CacheKey {
        let key = self.key_of(&value);

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.replace(value);
            self.order.move_to_front(entry.slot);
            self.stats.record_update();
            trace!(%key, "overwrote existing entry");
            return key;
        }

        let slot = self.order.push_front(key);
        self.entries.insert(key, CacheEntry::new(value, slot));
        self.stats.record_insert();

        if self.entries.len() > self.capacity {
            self.evict_oldest();
        }
        self.stats.set_total_entries(self.entries.len());

        key
    }

    /// Derives the key `value` would be stored under.
    pub fn key_of(&self, value: &T) -> CacheKey {
        CacheKey::derive(value, &self.hasher)
    }
}

impl<T, S> LruCache<T, S> {
    // == Get ==
    /// Retrieves the value stored under `key` and marks it most recently used.
    ///
    /// # Errors
    /// Returns [`CacheError::KeyNotFound`] if the key was never stored or
    /// has been evicted.
    pub fn get(&mut self, key: CacheKey) -> Result<&T> {
        match self.entries.get(&key) {
            Some(entry) => {
                self.order.move_to_front(entry.slot);
                self.stats.record_hit();
                trace!(%key, "cache hit");
                Ok(&entry.value)
            }
            None => {
                self.stats.record_miss();
                trace!(%key, "cache miss");
                Err(CacheError::KeyNotFound(key))
            }
        }
    }

    // == Peek ==
    /// Returns the value under `key` without touching recency or stats.
    pub fn peek(&self, key: CacheKey) -> Option<&T> {
        self.entries.get(&key).map(|entry| &entry.value)
    }

    /// Returns true if `key` is currently cached.
    pub fn contains(&self, key: CacheKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Iterates cached keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = CacheKey> + '_ {
        self.order.iter()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.order.pop_back() {
            self.entries.remove(&evicted);
            self.stats.record_eviction();
            debug!(key = %evicted, "evicted least recently used entry");
        }
    }
}
