//! Insertion Order Module
//!
//! Tracks first-insertion order of keys for FIFO eviction.

use std::collections::BTreeMap;

// == Insertion Order ==
/// Records the order in which keys were first inserted.
///
/// Each key is filed under a monotonically increasing sequence number, so the
/// smallest sequence is always the oldest insertion. Overwrites do not touch
/// the index; only removal and re-insertion move a key to the back.
#[derive(Debug)]
pub struct InsertionOrder<K> {
    /// Keys by insertion sequence
    slots: BTreeMap<u64, K>,
    /// Next sequence number to hand out
    next_seq: u64,
}

impl<K> Default for InsertionOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> InsertionOrder<K> {
    // == Constructor ==
    /// Creates a new empty order index.
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            next_seq: 0,
        }
    }

    // == Push ==
    /// Files a key as the newest insertion and returns its sequence number.
    pub fn push(&mut self, key: K) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots.insert(seq, key);
        seq
    }

    // == Remove ==
    /// Removes the slot for `seq`, returning its key if it was tracked.
    pub fn remove(&mut self, seq: u64) -> Option<K> {
        self.slots.remove(&seq)
    }

    // == Pop Oldest ==
    /// Returns and removes the earliest-inserted key.
    ///
    /// Returns None if the index is empty.
    pub fn pop_oldest(&mut self) -> Option<K> {
        self.slots.pop_first().map(|(_, key)| key)
    }

    // == Clear ==
    /// Drops every slot. Sequence numbers keep increasing afterwards.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
