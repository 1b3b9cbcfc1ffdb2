//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::cache::CacheKey;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity given at construction was zero or negative
    #[error("Invalid capacity: {0} (must be greater than 0)")]
    InvalidCapacity(i64),

    /// Key was never inserted or has been evicted
    #[error("Key not found: {0}")]
    KeyNotFound(CacheKey),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidCapacity(-1).to_string(),
            "Invalid capacity: -1 (must be greater than 0)"
        );
        assert_eq!(
            CacheError::KeyNotFound(CacheKey::from(42)).to_string(),
            "Key not found: 000000000000002a"
        );
    }
}
