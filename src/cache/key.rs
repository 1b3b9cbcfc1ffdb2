//! Cache Key Module
//!
//! Content-derived keys: a value is stored under the hash of itself.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use serde::Serialize;

/// Hasher builder used when none is supplied.
///
/// `DefaultHasher::new()` uses fixed keys, so equal values map to the same
/// key in every cache instance of the process.
pub type DefaultKeyBuilder = BuildHasherDefault<DefaultHasher>;

// == Cache Key ==
/// Identity of a stored value, derived from its content.
///
/// Distinct values that hash identically share a key; the later `put`
/// overwrites the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CacheKey(u64);

impl CacheKey {
    /// Derives the key for `value` using `hasher`.
    pub fn derive<T: Hash + ?Sized, S: BuildHasher>(value: &T, hasher: &S) -> Self {
        Self(hasher.hash_one(value))
    }

    /// Returns the raw hash.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for CacheKey {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
