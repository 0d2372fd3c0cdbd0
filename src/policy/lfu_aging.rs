//! LFU-Aging eviction: LFU with periodic decay of reference counts.
//!
//! Plain LFU lets a key that was hot last week outrank everything inserted
//! since. Aging corrects that: whenever at least the configured interval has
//! elapsed since the last pass, every tracked count is decremented by one
//! (floored at 1) before the next victim is selected. Old hot keys cool off
//! one step per interval until they compete with fresh entries again.
//!
//! The pass runs lazily inside `victim()`; no timer thread exists. The only
//! external effect of this module is reading the monotonic clock.

use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::error::CacheError;
use crate::policy::lfu::LfuPolicy;
use crate::policy::ReplacementPolicy;
use crate::victim::Victim;

/// Tracks when the next aging pass is due.
///
/// Wraps the interval and the monotonic timestamp of the last pass. Swapping
/// two aging policies exchanges the whole clock, timestamp included.
#[derive(Debug, Clone)]
pub struct AgingClock {
    interval: Duration,
    last_pass: Instant,
}

impl AgingClock {
    /// Creates a clock whose first pass is due `interval` from now.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: Instant::now(),
        }
    }

    /// The configured aging interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` when a pass is due, restarting the interval in that
    /// case.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_pass) >= self.interval {
            self.last_pass = now;
            true
        } else {
            false
        }
    }
}

/// Policy that evicts the least frequently used key after periodic count
/// decay.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use evictkit::policy::{LfuAgingPolicy, ReplacementPolicy};
///
/// let mut policy = LfuAgingPolicy::new(3, Duration::from_secs(3600));
/// policy.insert(&1).unwrap();
/// policy.insert(&2).unwrap();
/// policy.touch(&2);
///
/// // Within the interval this behaves exactly like LFU.
/// assert_eq!(policy.victim().into_inner(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct LfuAgingPolicy<K> {
    lfu: LfuPolicy<K>,
    clock: AgingClock,
}

impl<K> LfuAgingPolicy<K>
where
    K: Ord + Hash + Clone,
{
    /// Creates a policy pre-sized for `capacity` keys that ages counts every
    /// `interval`.
    pub fn new(capacity: usize, interval: Duration) -> Self {
        Self {
            lfu: LfuPolicy::new(capacity),
            clock: AgingClock::new(interval),
        }
    }

    /// The current reference count for `key`, if tracked.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.lfu.frequency(key)
    }

    /// The configured aging interval.
    pub fn interval(&self) -> Duration {
        self.clock.interval()
    }
}

impl<K> ReplacementPolicy<K> for LfuAgingPolicy<K>
where
    K: Ord + Hash + Clone,
{
    fn insert(&mut self, key: &K) -> Result<(), CacheError<K>> {
        self.lfu.insert(key)
    }

    fn remove(&mut self, key: &K) {
        self.lfu.remove(key);
    }

    fn touch(&mut self, key: &K) {
        self.lfu.touch(key);
    }

    fn clear(&mut self) {
        self.lfu.clear();
    }

    fn victim(&mut self) -> Victim<K> {
        if self.clock.tick() {
            self.lfu.age_all();
        }
        self.lfu.victim()
    }

    fn len(&self) -> usize {
        self.lfu.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.lfu.contains(key)
    }
}
