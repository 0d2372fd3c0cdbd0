//! Most Recently Used eviction.
//!
//! Same recency bookkeeping as [`LruPolicy`], inverted selection: the victim
//! is the *front* of the recency list. Fits workloads where a key just used
//! is the one least likely to be needed again, such as sequential scans over
//! data sets larger than the cache.

use std::hash::Hash;

use crate::error::CacheError;
use crate::policy::lru::LruPolicy;
use crate::policy::ReplacementPolicy;
use crate::victim::Victim;

/// Policy that evicts the key used most recently.
#[derive(Debug, Clone)]
pub struct MruPolicy<K> {
    inner: LruPolicy<K>,
}

impl<K> MruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a policy pre-sized for `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: LruPolicy::new(capacity),
        }
    }
}

impl<K> ReplacementPolicy<K> for MruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: &K) -> Result<(), CacheError<K>> {
        self.inner.insert(key)
    }

    fn remove(&mut self, key: &K) {
        self.inner.remove(key);
    }

    fn touch(&mut self, key: &K) {
        self.inner.touch(key);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn victim(&mut self) -> Victim<K> {
        self.inner.most_recent().cloned().into()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }
}
