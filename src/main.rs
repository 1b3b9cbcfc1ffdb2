//! Hash LRU workload driver
//!
//! Runs a synthetic mixed put/get workload against a shared cache and
//! reports the resulting statistics as JSON.

use anyhow::Context;
use tokio::task::JoinSet;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hash_lru::{CacheKey, Config, SharedCache};

/// Entry point for the workload driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache with the configured capacity
/// 4. Spawn workers and wait for them to finish
/// 5. Print cache statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hash_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, workers={}, ops_per_worker={}, key_space={}",
        config.capacity, config.workers, config.ops_per_worker, config.key_space
    );

    let cache = SharedCache::new(config.capacity).context("failed to create cache")?;

    let mut workers = JoinSet::new();
    for worker in 0..config.workers {
        workers.spawn(run_worker(cache.clone(), worker, config.clone()));
    }
    while let Some(result) = workers.join_next().await {
        result.context("worker task failed")?;
    }

    let stats = cache.stats().await;
    info!(
        "Workload complete: hit_rate={:.3}, evictions={}",
        stats.hit_rate(),
        stats.evictions
    );
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// Drives one worker: every third operation stores a value, the rest look
/// up keys this worker stored earlier, some of which will have been evicted.
async fn run_worker(cache: SharedCache<String>, worker: usize, config: Config) {
    let key_space = config.key_space.max(1);
    let mut seen: Vec<CacheKey> = Vec::new();

    for op in 0..config.ops_per_worker {
        let step = (worker as u64).wrapping_mul(7919) + (op as u64).wrapping_mul(31);

        if op % 3 == 0 || seen.is_empty() {
            let key = cache.put(format!("value-{}", step % key_space)).await;
            seen.push(key);
        } else {
            let key = seen[(step as usize) % seen.len()];
            if let Err(err) = cache.get(key).await {
                debug!(worker, %err, "lookup missed");
            }
        }
    }

    debug!(worker, "worker finished");
}
