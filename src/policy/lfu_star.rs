//! LFU* eviction: LFU restricted to reference count 1.
//!
//! Tracks frequencies exactly like [`LfuPolicy`] but only ever nominates
//! keys whose count is still 1, following M. Arlitt's observation that
//! entries requested a second time are worth pinning. A key touched even
//! once becomes unevictable, so a full cache of touched keys makes the
//! policy return an empty victim and the owning cache report
//! `CacheFull` on insert.

use std::hash::Hash;

use crate::error::CacheError;
use crate::policy::lfu::LfuPolicy;
use crate::policy::ReplacementPolicy;
use crate::victim::Victim;

/// Policy that evicts only keys with a reference count of exactly 1.
///
/// # Example
///
/// ```
/// use evictkit::policy::{LfuStarPolicy, ReplacementPolicy};
///
/// let mut policy = LfuStarPolicy::new(2);
/// policy.insert(&1).unwrap();
/// policy.insert(&2).unwrap();
/// policy.touch(&1);
/// policy.touch(&2);
///
/// // Every key has been seen twice; nothing is evictable.
/// assert!(policy.victim().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LfuStarPolicy<K> {
    inner: LfuPolicy<K>,
}

impl<K> LfuStarPolicy<K>
where
    K: Ord + Hash + Clone,
{
    /// Creates a policy pre-sized for `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: LfuPolicy::new(capacity),
        }
    }

    /// The current reference count for `key`, if tracked.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.inner.frequency(key)
    }

    /// Applies one aging pass to the underlying frequency state.
    pub(crate) fn age_all(&mut self) {
        self.inner.age_all();
    }
}

impl<K> ReplacementPolicy<K> for LfuStarPolicy<K>
where
    K: Ord + Hash + Clone,
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
        self.inner.first_key_at(1).cloned().into()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_key_is_the_victim() {
        let mut policy = LfuStarPolicy::new(3);
        policy.insert(&1).unwrap();
        policy.insert(&2).unwrap();
        policy.touch(&1);

        assert_eq!(policy.victim().into_inner(), Some(2));
    }

    #[test]
    fn all_touched_means_no_victim() {
        let mut policy = LfuStarPolicy::new(3);
        policy.insert(&1).unwrap();
        policy.insert(&2).unwrap();
        policy.touch(&1);
        policy.touch(&2);

        assert!(policy.victim().is_none());
        assert_eq!(policy.len(), 2);
    }

    #[test]
    fn count_one_ties_resolve_in_key_order() {
        let mut policy = LfuStarPolicy::new(3);
        policy.insert(&5).unwrap();
        policy.insert(&3).unwrap();
        policy.insert(&4).unwrap();

        assert_eq!(policy.victim().into_inner(), Some(3));
    }

    #[test]
    fn removing_touched_keys_is_still_allowed() {
        let mut policy = LfuStarPolicy::new(3);
        policy.insert(&1).unwrap();
        policy.touch(&1);

        // Manual removal ignores the count restriction.
        policy.remove(&1);
        assert!(policy.is_empty());
    }

    #[test]
    fn empty_policy_has_no_victim() {
        let mut policy: LfuStarPolicy<u32> = LfuStarPolicy::new(3);
        assert!(policy.victim().is_none());
    }
}
