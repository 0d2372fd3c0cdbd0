//! LFU*-Aging eviction: periodic count decay, then LFU* selection.
//!
//! Composes the [`AgingClock`] with an [`LfuStarPolicy`]: each `victim()`
//! first runs the decay pass if it is due, then applies the count-1
//! restriction. Unlike plain LFU*, entries touched more than once regain
//! evictability after enough aging passes bring their counts back down
//! to 1. Still able to return an empty victim (e.g. every count remains
//! at 2 or above after one decrement), so the owning cache can report
//! `CacheFull`.

use std::hash::Hash;
use std::time::Duration;

use crate::error::CacheError;
use crate::policy::lfu_aging::AgingClock;
use crate::policy::lfu_star::LfuStarPolicy;
use crate::policy::ReplacementPolicy;
use crate::victim::Victim;

/// Policy combining periodic count decay with count-1-only eviction.
#[derive(Debug, Clone)]
pub struct LfuStarAgingPolicy<K> {
    star: LfuStarPolicy<K>,
    clock: AgingClock,
}

impl<K> LfuStarAgingPolicy<K>
where
    K: Ord + Hash + Clone,
{
    /// Creates a policy pre-sized for `capacity` keys that ages counts every
    /// `interval`.
    pub fn new(capacity: usize, interval: Duration) -> Self {
        Self {
            star: LfuStarPolicy::new(capacity),
            clock: AgingClock::new(interval),
        }
    }

    /// The current reference count for `key`, if tracked.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.star.frequency(key)
    }

    /// The configured aging interval.
    pub fn interval(&self) -> Duration {
        self.clock.interval()
    }
}

impl<K> ReplacementPolicy<K> for LfuStarAgingPolicy<K>
where
    K: Ord + Hash + Clone,
{
    fn insert(&mut self, key: &K) -> Result<(), CacheError<K>> {
        self.star.insert(key)
    }

    fn remove(&mut self, key: &K) {
        self.star.remove(key);
    }

    fn touch(&mut self, key: &K) {
        self.star.touch(key);
    }

    fn clear(&mut self) {
        self.star.clear();
    }

    fn victim(&mut self) -> Victim<K> {
        if self.clock.tick() {
            self.star.age_all();
        }
        self.star.victim()
    }

    fn len(&self) -> usize {
        self.star.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.star.contains(key)
    }
}
