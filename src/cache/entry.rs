//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single stored value with its expiry and eviction-order metadata.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    /// The stored value
    pub value: V,
    /// Sequence number assigned on first insertion
    pub seq: u64,
    /// Absolute expiry instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates a new entry stamped at `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `seq` - Insertion sequence number from the order index
    /// * `ttl` - Optional time-to-live
    /// * `now` - Reference instant for the expiry stamp
    pub fn new(value: V, seq: u64, ttl: Option<Duration>, now: Instant) -> Self {
        Self {
            value,
            seq,
            expires_at: expiry(ttl, now),
        }
    }

    // == Refresh ==
    /// Replaces the value and restamps the expiry. The sequence number is kept.
    pub fn refresh(&mut self, value: V, ttl: Option<Duration>, now: Instant) {
        self.value = value;
        self.expires_at = expiry(ttl, now);
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// An entry is expired once `now` reaches its expiry instant, so a zero
    /// TTL expires immediately.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Absolute expiry for a write at `now`.
///
/// A lifetime too long to represent as an `Instant` never expires.
fn expiry(ttl: Option<Duration>, now: Instant) -> Option<Instant> {
    ttl.and_then(|ttl| now.checked_add(ttl))
}
