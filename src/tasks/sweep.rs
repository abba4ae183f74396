//! TTL Sweep Task
//!
//! Background task that periodically purges expired cache entries.

use std::hash::Hash;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// Expiry is already enforced lazily on every read, so the sweep only
/// reclaims memory held by entries nobody looks at. It sleeps for `interval`
/// between runs and holds the cache lock only while purging.
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop sweeping.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::new(&CacheConfig::new(1000).with_ttl(60_000));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<K, V>(cache: SharedCache<K, V>, interval: Duration) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Send + 'static,
{
    tokio::spawn(async move {
        info!(?interval, "Starting TTL sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!(removed, "TTL sweep purged expired entries");
            } else {
                debug!("TTL sweep found no expired entries");
            }
        }
    })
}
