//! Ordered reference-count index for the LFU policy family.
//!
//! Keeps two views of the same population in lockstep:
//!
//! ```text
//!   buckets: BTreeMap<count, BTreeSet<K>>      counts: FxHashMap<K, count>
//!   ┌───────┬──────────────────┐               ┌─────┬───────┐
//!   │   1   │ {k₃, k₉}         │               │ k₃  │   1   │
//!   │   2   │ {k₁}             │               │ k₉  │   1   │
//!   │   5   │ {k₂, k₄}         │               │ k₁  │   2   │
//!   └───────┴──────────────────┘               │ ... │  ...  │
//!     ordered by count                         └─────┴───────┘
//!     keys ordered within a bucket               O(1) back-map
//! ```
//!
//! The bucket map answers "which key has the smallest count" (plain LFU) and
//! "is there a key with count exactly 1" (LFU*) in O(log n); the back-map
//! locates a key's bucket for O(log n) promotion and removal. Ties within a
//! bucket resolve in ascending key order because `BTreeSet` iterates sorted.
//!
//! Counts never drop below 1. [`FreqIndex::age_all`] applies the LFU-Aging
//! decrement to the whole population in one pass.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;

/// Multiset of keys bucketed and ordered by reference count.
#[derive(Debug, Clone)]
pub struct FreqIndex<K> {
    buckets: BTreeMap<u64, BTreeSet<K>>,
    counts: FxHashMap<K, u64>,
}

impl<K> FreqIndex<K>
where
    K: Ord + std::hash::Hash + Clone,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            counts: FxHashMap::default(),
        }
    }

    /// Creates an empty index with the back-map pre-sized for `capacity`
    /// keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: BTreeMap::new(),
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns `true` if `key` is tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    /// The current count for `key`, if tracked.
    pub fn count_of(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Tracks `key` with the given starting count (floored at 1).
    ///
    /// Re-inserting a tracked key moves it to the new count.
    pub fn insert(&mut self, key: &K, count: u64) {
        let count = count.max(1);
        if let Some(old) = self.counts.insert(key.clone(), count) {
            self.unbucket(key, old);
        }
        self.buckets.entry(count).or_default().insert(key.clone());
    }

    /// Stops tracking `key`, returning its last count. A no-op for untracked
    /// keys.
    pub fn remove(&mut self, key: &K) -> Option<u64> {
        let count = self.counts.remove(key)?;
        self.unbucket(key, count);
        Some(count)
    }

    /// Increments `key`'s count by one and rebuckets it. Returns the new
    /// count, or `None` for untracked keys.
    pub fn promote(&mut self, key: &K) -> Option<u64> {
        let count = *self.counts.get(key)?;
        let next = count.saturating_add(1);
        if next != count {
            self.rebucket(key, count, next);
        }
        Some(next)
    }

    /// Decrements `key`'s count by one, floored at 1. Returns the new count,
    /// or `None` for untracked keys.
    pub fn demote(&mut self, key: &K) -> Option<u64> {
        let count = *self.counts.get(key)?;
        if count <= 1 {
            return Some(count);
        }
        self.rebucket(key, count, count - 1);
        Some(count - 1)
    }

    /// Decrements every tracked count by one, floored at 1.
    ///
    /// One aging pass of the LFU-Aging policies. Linear in the number of
    /// tracked keys.
    pub fn age_all(&mut self) {
        if self.buckets.is_empty() {
            return;
        }
        let old = std::mem::take(&mut self.buckets);
        for (count, keys) in old {
            let aged = (count - 1).max(1);
            for key in &keys {
                if let Some(entry) = self.counts.get_mut(key) {
                    *entry = aged;
                }
            }
            self.buckets.entry(aged).or_default().extend(keys);
        }
    }

    /// A key with the smallest count, ties resolved in ascending key order.
    pub fn min_key(&self) -> Option<&K> {
        self.buckets.values().next()?.first()
    }

    /// The first key (in key order) with exactly the given count.
    pub fn first_key_at(&self, count: u64) -> Option<&K> {
        self.buckets.get(&count)?.first()
    }

    /// Drops every key and count.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.counts.clear();
    }

    fn rebucket(&mut self, key: &K, from: u64, to: u64) {
        self.unbucket(key, from);
        self.buckets.entry(to).or_default().insert(key.clone());
        if let Some(entry) = self.counts.get_mut(key) {
            *entry = to;
        }
    }

    /// Removes `key` from the `count` bucket, dropping the bucket when it
    /// empties.
    fn unbucket(&mut self, key: &K, count: u64) {
        if let Some(bucket) = self.buckets.get_mut(&count) {
            bucket.remove(key);
            if bucket.is_empty() {
                self.buckets.remove(&count);
            }
        }
    }
}
