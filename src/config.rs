//! Configuration Module
//!
//! Handles loading workload driver configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Workload driver configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: i64,
    /// Number of concurrent workers driving the cache
    pub workers: usize,
    /// Operations performed by each worker
    pub ops_per_worker: usize,
    /// Number of distinct values the workload draws from
    pub key_space: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `WORKLOAD_WORKERS` - Concurrent workers (default: 4)
    /// - `WORKLOAD_OPS` - Operations per worker (default: 10000)
    /// - `WORKLOAD_KEY_SPACE` - Distinct values in the workload (default: 2000)
    ///
    /// Unset or unparsable variables fall back to their default. Capacity is
    /// not validated here; the cache rejects non-positive values itself.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_or("CACHE_CAPACITY", defaults.capacity),
            workers: env_or("WORKLOAD_WORKERS", defaults.workers),
            ops_per_worker: env_or("WORKLOAD_OPS", defaults.ops_per_worker),
            key_space: env_or("WORKLOAD_KEY_SPACE", defaults.key_space),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            workers: 4,
            ops_per_worker: 10_000,
            key_space: 2000,
        }
    }
}
