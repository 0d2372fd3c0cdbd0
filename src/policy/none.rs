//! The no-tracking policy.
//!
//! Keeps nothing but the set of tracked keys and evicts whichever of them the
//! backing set yields first. Useful as a baseline and for workloads where any
//! resident entry is as good as any other. Always able to evict while
//! nonempty, so `insert` on a full cache never fails with this policy.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::CacheError;
use crate::policy::ReplacementPolicy;
use crate::victim::Victim;

/// Policy that tracks membership only and evicts an arbitrary key.
///
/// The victim is whatever the hash set happens to yield first; callers must
/// not rely on which key that is.
#[derive(Debug, Clone)]
pub struct NonePolicy<K> {
    keys: FxHashSet<K>,
}

impl<K> NonePolicy<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a policy pre-sized for `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<K> ReplacementPolicy<K> for NonePolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: &K) -> Result<(), CacheError<K>> {
        self.keys.insert(key.clone());
        Ok(())
    }

    fn remove(&mut self, key: &K) {
        self.keys.remove(key);
    }

    fn touch(&mut self, _key: &K) {}

    fn clear(&mut self) {
        self.keys.clear();
    }

    fn victim(&mut self) -> Victim<K> {
        self.keys.iter().next().cloned().into()
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victim_is_some_tracked_key() {
        let mut policy = NonePolicy::new(4);
        policy.insert(&1).unwrap();
        policy.insert(&2).unwrap();

        let victim = policy.victim().into_inner().unwrap();
        assert!(policy.contains(&victim));
    }

    #[test]
    fn empty_policy_has_no_victim() {
        let mut policy: NonePolicy<u32> = NonePolicy::new(4);
        assert!(policy.victim().is_none());
    }

    #[test]
    fn touch_is_inert() {
        let mut policy = NonePolicy::new(4);
        policy.insert(&1).unwrap();
        policy.touch(&1);
        policy.touch(&99);
        assert_eq!(policy.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut policy = NonePolicy::new(4);
        policy.insert(&1).unwrap();
        policy.remove(&1);
        policy.remove(&1);
        assert!(policy.is_empty());
    }

    #[test]
    fn clear_drops_all_keys() {
        let mut policy = NonePolicy::new(4);
        policy.insert(&1).unwrap();
        policy.insert(&2).unwrap();
        policy.clear();
        assert!(policy.is_empty());
        assert!(policy.victim().is_none());
    }
}
