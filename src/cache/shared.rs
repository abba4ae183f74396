//! Shared Cache Module
//!
//! Cloneable handle guarding one [`Cache`] behind a single async mutex.

use std::borrow::Borrow;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;

use crate::cache::Cache;
use crate::config::CacheConfig;
use crate::tasks::spawn_sweep_task;

// == Shared Cache ==
/// Thread-safe handle to a [`Cache`].
///
/// Every operation takes the lock for its whole duration. Clones share the
/// same underlying cache.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<Cache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a shared cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self::from_cache(Cache::new(config))
    }

    /// Creates a shared cache and, when `config.sweep_interval` is set, starts
    /// the background sweep on the current tokio runtime.
    ///
    /// Returns the sweep's JoinHandle so callers can abort it on shutdown.
    pub fn with_sweep(config: &CacheConfig) -> (Self, Option<JoinHandle<()>>)
    where
        K: Send + 'static,
        V: Send + 'static,
    {
        let cache = Self::new(config);
        let sweep = config
            .sweep_interval_duration()
            .map(|interval| spawn_sweep_task(cache.clone(), interval));
        (cache, sweep)
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: Cache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Locks the cache for a batch of operations.
    pub async fn lock(&self) -> MutexGuard<'_, Cache<K, V>> {
        self.inner.lock().await
    }

    pub async fn set(&self, key: K, value: V) {
        self.inner.lock().await.set(key, value);
    }

    /// Returns a clone of the live value for `key`.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().await.get(key).cloned()
    }

    pub async fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().await.has(key)
    }

    pub async fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().await.delete(key)
    }

    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    pub async fn size(&self) -> usize {
        self.inner.lock().await.size()
    }

    pub async fn is_full(&self) -> bool {
        self.inner.lock().await.is_full()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn purge_expired(&self) -> usize {
        self.inner.lock().await.purge_expired()
    }

    // == Get Or Load ==
    /// Returns the cached value for `key`, awaiting `load` on a miss.
    ///
    /// The lock is released while the loader runs, so concurrent misses on the
    /// same key may each load; the last write wins. A loader error is
    /// returned unchanged and nothing is cached.
    pub async fn get_or_try_insert_with<E, F, Fut>(&self, key: K, load: F) -> Result<V, E>
    where
        V: Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key).await {
            return Ok(value);
        }

        let value = load().await?;
        self.set(key, value.clone()).await;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::error::DbError;

    #[tokio::test]
    async fn test_shared_set_and_get() {
        let cache = SharedCache::new(&CacheConfig::new(10));

        cache.set("a".to_string(), 1).await;

        assert_eq!(cache.get("a").await, Some(1));
        assert!(cache.has("a").await);
        assert_eq!(cache.size().await, 1);
    }

    #[tokio::test]
    async fn test_shared_clones_see_same_entries() {
        let cache = SharedCache::new(&CacheConfig::new(10));
        let other = cache.clone();

        cache.set("a", 1).await;

        assert_eq!(other.get("a").await, Some(1));
        assert!(other.delete("a").await);
        assert!(!cache.has("a").await);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_shared_eviction_matches_cache() {
        let cache = SharedCache::new(&CacheConfig::new(3));

        for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
            cache.set(key, value).await;
        }
        assert!(cache.is_full().await);

        cache.set("d", 4).await;
        cache.set("a", 5).await;

        assert_eq!(cache.get("a").await, Some(5));
        assert!(!cache.has("b").await);
        assert_eq!(cache.size().await, 3);
    }

    #[tokio::test]
    async fn test_shared_clear() {
        let cache = SharedCache::new(&CacheConfig::new(3));

        cache.set("a", 1).await;
        cache.set("b", 2).await;
        cache.clear().await;

        assert!(cache.is_empty().await);
        assert!(!cache.is_full().await);
    }

    #[tokio::test]
    async fn test_shared_purge_expired() {
        let cache = SharedCache::new(&CacheConfig::new(10).with_ttl(1));

        cache.set("a", 1).await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(cache.purge_expired().await, 1);
        assert_eq!(cache.size().await, 0);
    }

    #[tokio::test]
    async fn test_shared_with_sweep_uses_config_interval() {
        let config = CacheConfig::new(10).with_ttl(20).with_sweep_interval(5);
        let (cache, sweep) = SharedCache::with_sweep(&config);
        let sweep = sweep.expect("sweep interval is configured");

        cache.set("a", 1).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Swept without any read touching the entry
        assert_eq!(cache.lock().await.purge_expired(), 0);
        assert!(cache.is_empty().await);

        sweep.abort();
    }

    #[tokio::test]
    async fn test_shared_with_sweep_without_interval() {
        let config = CacheConfig::new(10).with_ttl(60_000);
        let (cache, sweep) = SharedCache::<&str, i32>::with_sweep(&config);

        assert!(sweep.is_none());
        cache.set("a", 1).await;
        assert_eq!(cache.get("a").await, Some(1));
    }

    #[tokio::test]
    async fn test_shared_concurrent_writers() {
        let cache = SharedCache::new(&CacheConfig::new(50));

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.set(i, i * 2).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.size().await, 50);
        assert!(cache.is_full().await);
    }

    #[tokio::test]
    async fn test_shared_get_or_try_insert_with() {
        let cache = SharedCache::new(&CacheConfig::new(10));

        let loaded: Result<String, DbError> = cache
            .get_or_try_insert_with("user:1", || async { Ok("alice".to_string()) })
            .await;
        assert_eq!(loaded.unwrap(), "alice");

        let cached: Result<String, DbError> = cache
            .get_or_try_insert_with("user:1", || async { Err(DbError::disconnected()) })
            .await;
        assert_eq!(cached.unwrap(), "alice");
    }

    #[tokio::test]
    async fn test_shared_get_or_try_insert_with_error_not_cached() {
        let cache: SharedCache<&str, String> = SharedCache::new(&CacheConfig::new(10));

        let result = cache
            .get_or_try_insert_with("user:2", || async { Err(DbError::not_found()) })
            .await;

        assert_eq!(result, Err(DbError::not_found()));
        assert!(!cache.has("user:2").await);
    }
}
