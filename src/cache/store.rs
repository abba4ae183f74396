//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order tracking
//! and lazy TTL expiration.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::cache::{Entry, InsertionOrder};
use crate::config::CacheConfig;

// == Cache ==
/// Capacity-bounded key-value store with optional per-entry TTL.
///
/// Expired entries are detected lazily: every observing call (`get`, `has`,
/// `size`, `is_full`, `is_empty`) treats them as absent and frees their slot.
/// When a new key is added to a full cache, the key inserted earliest is
/// evicted. Overwriting a live key keeps its place in that order.
///
/// The cache has no internal locking; see [`SharedCache`](crate::SharedCache)
/// for a handle that can be used across tasks.
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Key-value storage
    entries: HashMap<K, Entry<V>>,
    /// First-insertion order of stored keys
    order: InsertionOrder<K>,
    /// Maximum number of live entries
    capacity: usize,
    /// Lifetime applied to every write, None = entries never expire
    ttl: Option<Duration>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructors ==
    /// Creates a cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self::build(config.capacity, config.ttl_duration())
    }

    /// Creates a cache whose entries never expire by time.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::build(capacity, None)
    }

    /// Creates a cache whose entries expire `ttl` after their last write.
    pub fn with_ttl(capacity: usize, ttl: Duration) -> Self {
        Self::build(capacity, Some(ttl))
    }

    fn build(capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(1024)),
            order: InsertionOrder::new(),
            capacity,
            ttl,
        }
    }

    // == Set ==
    /// Inserts or updates the value for `key`.
    ///
    /// A live key keeps its eviction slot and gets a fresh expiry. A new key
    /// on a full cache first purges expired entries, then evicts the earliest
    /// inserted entry if the cache is still full. With zero capacity nothing
    /// is stored.
    pub fn set(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            debug!("Cache has zero capacity, dropping write");
            return;
        }

        let now = Instant::now();
        self.expire_key(&key, now);

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.refresh(value, self.ttl, now);
            return;
        }

        if self.entries.len() >= self.capacity {
            self.purge_expired_at(now);
            if self.entries.len() >= self.capacity {
                self.evict_oldest();
            }
        }

        let seq = self.order.push(key.clone());
        self.entries.insert(key, Entry::new(value, seq, self.ttl, now));
        debug_assert_eq!(self.order.len(), self.entries.len());
    }

    // == Get ==
    /// Returns the value for `key` if present and not expired.
    ///
    /// An expired entry is removed as a side effect.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.expire_key(key, Instant::now()) {
            return None;
        }
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Has ==
    /// Returns whether `key` is present and not expired.
    pub fn has<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    // == Get Or Load ==
    /// Returns the cached value for `key`, loading and storing it on a miss.
    ///
    /// A loader error is returned unchanged and nothing is cached.
    pub fn get_or_try_insert_with<E, F>(&mut self, key: K, load: F) -> Result<V, E>
    where
        V: Clone,
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value.clone());
        }

        let value = load()?;
        self.set(key, value.clone());
        Ok(value)
    }

    // == Delete ==
    /// Removes `key` if stored. Returns whether an entry was removed.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Size ==
    /// Returns the number of live entries, purging expired ones first.
    pub fn size(&mut self) -> usize {
        self.purge_expired();
        self.entries.len()
    }

    // == Is Full ==
    pub fn is_full(&mut self) -> bool {
        self.size() == self.capacity
    }

    // == Is Empty ==
    pub fn is_empty(&mut self) -> bool {
        self.size() == 0
    }

    // == Accessors ==
    /// Maximum number of live entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lifetime applied to each write.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&mut self, now: Instant) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let before = self.entries.len();
        let order = &mut self.order;
        self.entries.retain(|_, entry| {
            if entry.is_expired_at(now) {
                order.remove(entry.seq);
                false
            } else {
                true
            }
        });

        let removed = before - self.entries.len();
        if removed > 0 {
            trace!(removed, "Purged expired entries");
        }
        removed
    }

    // == Internal Helpers ==
    /// Removes `key` if its entry has expired. Returns whether it did.
    fn expire_key<Q>(&mut self, key: &Q, now: Instant) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now));
        if expired {
            self.remove_entry(key);
        }
        expired
    }

    fn remove_entry<Q>(&mut self, key: &Q) -> Option<Entry<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.entries.remove(key)?;
        self.order.remove(entry.seq);
        Some(entry)
    }

    fn evict_oldest(&mut self) {
        if let Some(key) = self.order.pop_oldest() {
            self.entries.remove(&key);
            debug!(capacity = self.capacity, "Evicted oldest entry");
        }
    }
}
