//! The cache shell: storage, policy, and capacity accounting.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                       Cache<K, V, S>                         │
//!   │                                                              │
//!   │   max_entries: usize         curr_entries: usize             │
//!   │                                                              │
//!   │   ┌───────────────────┐      ┌───────────────────────────┐   │
//!   │   │   S: Store<K, V>  │      │        Policy<K>          │   │
//!   │   │   key → value     │      │  eviction order metadata  │   │
//!   │   └───────────────────┘      └───────────────────────────┘   │
//!   │        every mutation is mirrored on both sides              │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Insertion flow
//!
//! ```text
//!   insert(k, v)
//!      │
//!      ├─ k already resident? ──────────────► return false
//!      │
//!      ├─ while at capacity:
//!      │     policy.victim() ── empty? ─────► Err(CacheFull)
//!      │          │
//!      │          └─ erase victim from storage AND policy
//!      │
//!      ├─ policy.insert(k) ──── rejected? ──► Err(InvalidKey), no changes
//!      │
//!      └─ storage.insert(k, v), size += 1 ──► return true
//! ```
//!
//! The shell owns both halves exclusively and keeps them pointwise equal:
//! the policy's tracked keys are exactly the storage's keys after every
//! public operation. The size counter is redundant with `storage.len()` by
//! design and asserted equal in debug builds.
//!
//! All operations complete synchronously; nothing suspends and nothing
//! locks. Share a cache across threads only behind external synchronization.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{CacheError, CacheResult, ConfigError};
use crate::policy::{CachePolicy, Policy, ReplacementPolicy};
use crate::store::{BTreeStore, HashStore, Store};

/// Cache with hashed storage, the common choice.
pub type HashCache<K, V> = Cache<K, V, HashStore<K, V>>;

/// Cache with ordered storage; `keys()` iterates in ascending key order.
pub type OrderedCache<K, V> = Cache<K, V, BTreeStore<K, V>>;

/// Bounded key→value cache driven by an eviction policy.
///
/// Capacity is fixed at construction (only [`swap`](Cache::swap) can move
/// it) and the policy variant is chosen at construction. Keys need
/// `Ord + Hash + Clone`: the policy engine keeps its own key-indexed
/// structures, ordered and hashed, independent of storage.
///
/// # Example
///
/// ```
/// use evictkit::policy::CachePolicy;
/// use evictkit::HashCache;
///
/// let mut cache: HashCache<u32, String> = HashCache::new(2, CachePolicy::Lru);
///
/// cache.insert(1, "one".to_string()).unwrap();
/// cache.insert(2, "two".to_string()).unwrap();
/// cache.touch(&1);
/// cache.insert(3, "three".to_string()).unwrap(); // evicts key 2
///
/// assert!(cache.contains(&1));
/// assert!(!cache.contains(&2));
/// assert_eq!(cache.fetch(&3).unwrap(), "three");
/// ```
#[derive(Clone)]
pub struct Cache<K, V, S = HashStore<K, V>> {
    storage: S,
    policy: Policy<K>,
    max_entries: usize,
    curr_entries: usize,
    _values: PhantomData<V>,
}

impl<K, V, S> Cache<K, V, S>
where
    K: Ord + Hash + Clone,
    S: Store<K, V>,
{
    /// Creates a cache holding at most `capacity` entries, evicting with
    /// `policy`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Cache::try_new) to
    /// validate instead.
    pub fn new(capacity: usize, policy: CachePolicy) -> Self {
        match Self::try_new(capacity, policy) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a cache, reporting invalid configuration instead of
    /// panicking.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::policy::CachePolicy;
    /// use evictkit::HashCache;
    ///
    /// assert!(HashCache::<u32, u32>::try_new(0, CachePolicy::Lru).is_err());
    /// assert!(HashCache::<u32, u32>::try_new(1, CachePolicy::Lru).is_ok());
    /// ```
    pub fn try_new(capacity: usize, policy: CachePolicy) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(Self {
            storage: S::with_capacity(capacity),
            policy: Policy::new(policy, capacity),
            max_entries: capacity,
            curr_entries: 0,
            _values: PhantomData,
        })
    }

    /// Inserts `key` → `value`.
    ///
    /// Returns `Ok(false)` without any change if `key` is already resident.
    /// While the cache is at capacity the policy is asked for victims, which
    /// are erased to make room.
    ///
    /// # Errors
    ///
    /// - [`CacheError::CacheFull`] when the cache is at capacity and the
    ///   policy cannot name a victim (possible with the LFU* family). The
    ///   insertion has had no effect.
    /// - [`CacheError::InvalidKey`] when the policy rejects the key; the
    ///   insertion aborts before touching storage. No shipped policy does
    ///   this.
    pub fn insert(&mut self, key: K, value: V) -> CacheResult<bool, K> {
        if self.storage.contains(&key) {
            return Ok(false);
        }
        while self.curr_entries >= self.max_entries {
            let victim = self
                .policy
                .victim()
                .into_inner()
                .ok_or(CacheError::CacheFull)?;
            if self.erase(&victim) == 0 {
                // Tracked keys and resident keys are the same set, so the
                // victim must have been erased; dropping the stray policy
                // entry keeps this loop finite regardless.
                self.policy.remove(&victim);
            }
        }
        self.policy.insert(&key)?;
        if self.storage.insert(key.clone(), value) {
            self.curr_entries += 1;
            Ok(true)
        } else {
            // Storage disagreed after the residency check above; back out
            // the policy entry so both sides stay aligned.
            self.policy.remove(&key);
            Ok(false)
        }
    }

    /// Returns a reference to the value bound to `key`, recording the access
    /// with the policy.
    ///
    /// The reference stays valid until the next mutating call on this cache.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidKey`] (carrying the key) when `key` is not
    /// resident.
    pub fn fetch(&mut self, key: &K) -> CacheResult<&V, K> {
        if !self.storage.contains(key) {
            return Err(CacheError::InvalidKey(key.clone()));
        }
        self.policy.touch(key);
        self.storage
            .get(key)
            .ok_or_else(|| CacheError::InvalidKey(key.clone()))
    }

    /// Returns whether `key` is resident, recording an access with the
    /// policy.
    ///
    /// The policy is touched even when `key` is absent. Per-key state is
    /// unaffected in that case (touching an untracked key is a no-op for
    /// every policy), but the call still reaches the policy, so `check` is
    /// an observation in a way a plain map lookup is not.
    /// [`contains`](Cache::contains) is the side-effect-free alternative.
    pub fn check(&mut self, key: &K) -> bool {
        self.policy.touch(key);
        self.storage.contains(key)
    }

    /// Records an access to `key` with the policy, without reading the
    /// value. A no-op for non-resident keys; never fails.
    pub fn touch(&mut self, key: &K) {
        self.policy.touch(key);
    }

    /// Removes `key` and its usage metadata. Returns the number of entries
    /// removed (0 or 1).
    pub fn erase(&mut self, key: &K) -> usize {
        let removed = self.storage.remove(key);
        if removed > 0 {
            self.policy.remove(key);
            self.curr_entries -= removed;
        }
        removed
    }

    /// Drops every entry and all policy state.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.policy.clear();
        self.curr_entries = 0;
    }

    /// Exchanges contents, policy state, and capacities with `other`.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidPolicy`] when the two caches were built with
    /// different policy variants. Neither cache is modified in that case.
    pub fn swap(&mut self, other: &mut Self) -> CacheResult<(), K> {
        self.policy.try_swap(&mut other.policy)?;
        self.storage.swap(&mut other.storage);
        std::mem::swap(&mut self.max_entries, &mut other.max_entries);
        self.curr_entries = self.storage.len();
        other.curr_entries = other.storage.len();
        Ok(())
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.curr_entries, self.storage.len());
        self.curr_entries
    }

    /// Returns `true` if no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident entries, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Returns 1 if `key` is resident, 0 otherwise, without touching the
    /// policy.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.storage.contains(key))
    }

    /// Returns whether `key` is resident, without touching the policy.
    pub fn contains(&self, key: &K) -> bool {
        self.storage.contains(key)
    }

    /// Iterates resident keys in backend-defined order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.storage.keys()
    }

    /// The policy engine driving this cache. Read-only; exposed for
    /// diagnostics and tests.
    pub fn policy(&self) -> &Policy<K> {
        &self.policy
    }
}

impl<K, V, S> fmt::Debug for Cache<K, V, S>
where
    K: Ord + Hash + Clone,
    S: Store<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    mod shell {
        use super::*;

        #[test]
        fn insert_within_capacity_stores_values() {
            let mut cache: HashCache<u32, &str> = HashCache::new(3, CachePolicy::Lru);

            assert_eq!(cache.insert(1, "a"), Ok(true));
            assert_eq!(cache.insert(2, "b"), Ok(true));
            assert_eq!(cache.len(), 2);
            assert_eq!(cache.fetch(&1), Ok(&"a"));
        }

        #[test]
        fn duplicate_insert_returns_false_and_changes_nothing() {
            let mut cache: HashCache<u32, &str> = HashCache::new(3, CachePolicy::Lru);
            cache.insert(1, "a").unwrap();

            assert_eq!(cache.insert(1, "replacement"), Ok(false));
            assert_eq!(cache.fetch(&1), Ok(&"a"));
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn eviction_keeps_len_at_capacity() {
            let mut cache: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);
            cache.insert(1, "a").unwrap();
            cache.insert(2, "b").unwrap();
            cache.insert(3, "c").unwrap();

            assert_eq!(cache.len(), 2);
            assert!(!cache.contains(&1));
        }

        #[test]
        fn fetch_missing_carries_the_key() {
            let mut cache: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);

            assert_eq!(cache.fetch(&9), Err(CacheError::InvalidKey(9)));
        }

        #[test]
        fn erase_reports_count_and_is_idempotent() {
            let mut cache: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);
            cache.insert(1, "a").unwrap();

            assert_eq!(cache.erase(&1), 1);
            assert_eq!(cache.erase(&1), 0);
            assert_eq!(cache.len(), 0);
        }

        #[test]
        fn check_reports_residency() {
            let mut cache: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);
            cache.insert(1, "a").unwrap();

            assert!(cache.check(&1));
            assert!(!cache.check(&9));
            // The missing-key check must leave the cache intact.
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn count_does_not_touch_the_policy() {
            let mut cache: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);
            cache.insert(1, "a").unwrap();
            cache.insert(2, "b").unwrap();

            // count/contains leave key 1 as the LRU victim; a fetch would not.
            assert_eq!(cache.count(&1), 1);
            assert!(cache.contains(&1));
            cache.insert(3, "c").unwrap();

            assert!(!cache.contains(&1));
            assert!(cache.contains(&2));
        }

        #[test]
        fn clear_resets_everything() {
            let mut cache: HashCache<u32, &str> = HashCache::new(3, CachePolicy::Lfu);
            cache.insert(1, "a").unwrap();
            cache.insert(2, "b").unwrap();
            cache.touch(&1);

            cache.clear();

            assert!(cache.is_empty());
            assert_eq!(cache.capacity(), 3);
            // Frequency state is gone too: key 2 would lose an LFU tie
            // otherwise.
            cache.insert(1, "a").unwrap();
            cache.insert(2, "b").unwrap();
            cache.insert(3, "c").unwrap();
            cache.insert(4, "d").unwrap();
            assert!(!cache.contains(&1));
        }

        #[test]
        #[should_panic(expected = "capacity")]
        fn zero_capacity_panics() {
            let _ = HashCache::<u32, u32>::new(0, CachePolicy::Lru);
        }

        #[test]
        fn try_new_rejects_zero_capacity() {
            let err = HashCache::<u32, u32>::try_new(0, CachePolicy::Lru).unwrap_err();
            assert!(err.message().contains("capacity"));
        }
    }

    mod swap {
        use super::*;

        #[test]
        fn swap_exchanges_contents_and_capacities() {
            let mut a: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);
            let mut b: HashCache<u32, &str> = HashCache::new(5, CachePolicy::Lru);
            a.insert(1, "a").unwrap();
            b.insert(2, "b").unwrap();
            b.insert(3, "c").unwrap();

            a.swap(&mut b).unwrap();

            assert_eq!(a.capacity(), 5);
            assert_eq!(a.len(), 2);
            assert!(a.contains(&2) && a.contains(&3));
            assert_eq!(b.capacity(), 2);
            assert_eq!(b.fetch(&1), Ok(&"a"));
        }

        #[test]
        fn swap_carries_usage_state() {
            let mut a: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);
            let mut b: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);
            a.insert(1, "a").unwrap();
            a.insert(2, "b").unwrap();
            a.touch(&1); // key 2 is now a's victim

            a.swap(&mut b).unwrap();

            // b inherited the recency order along with the entries.
            b.insert(3, "c").unwrap();
            assert!(b.contains(&1));
            assert!(!b.contains(&2));
        }

        #[test]
        fn mismatched_policies_fail_and_leave_both_sides_alone() {
            let mut a: HashCache<u32, &str> = HashCache::new(2, CachePolicy::Lru);
            let mut b: HashCache<u32, &str> = HashCache::new(5, CachePolicy::Adaptive);
            a.insert(1, "a").unwrap();
            b.insert(2, "b").unwrap();

            assert_eq!(a.swap(&mut b), Err(CacheError::InvalidPolicy));

            assert_eq!(a.capacity(), 2);
            assert!(a.contains(&1));
            assert_eq!(b.capacity(), 5);
            assert!(b.contains(&2));
        }

        #[test]
        fn aging_variants_swap_as_equals() {
            let interval = Duration::from_secs(3600);
            let mut a: HashCache<u32, &str> =
                HashCache::new(2, CachePolicy::LfuAging { interval });
            let mut b: HashCache<u32, &str> =
                HashCache::new(2, CachePolicy::LfuAging { interval });
            a.insert(1, "a").unwrap();

            a.swap(&mut b).unwrap();

            assert!(b.contains(&1));
            assert!(a.is_empty());
        }
    }

    mod full_cache {
        use super::*;

        #[test]
        fn lfu_star_refuses_when_all_keys_are_touched() {
            let mut cache: HashCache<u32, &str> = HashCache::new(2, CachePolicy::LfuStar);
            cache.insert(1, "a").unwrap();
            cache.insert(2, "b").unwrap();
            cache.touch(&1);
            cache.touch(&2);

            assert_eq!(cache.insert(3, "c"), Err(CacheError::CacheFull));
            // The failed insert left no trace.
            assert_eq!(cache.len(), 2);
            assert!(!cache.contains(&3));
        }

        #[test]
        fn lfu_star_evicts_untouched_keys() {
            let mut cache: HashCache<u32, &str> = HashCache::new(2, CachePolicy::LfuStar);
            cache.insert(1, "a").unwrap();
            cache.insert(2, "b").unwrap();
            cache.touch(&1);

            cache.insert(3, "c").unwrap();

            assert!(cache.contains(&1));
            assert!(!cache.contains(&2));
        }
    }

    mod ordered_backend {
        use super::*;
        use crate::cache::OrderedCache;

        #[test]
        fn ordered_cache_iterates_keys_in_order() {
            let mut cache: OrderedCache<u32, &str> = OrderedCache::new(3, CachePolicy::Lru);
            cache.insert(3, "c").unwrap();
            cache.insert(1, "a").unwrap();
            cache.insert(2, "b").unwrap();

            let keys: Vec<u32> = cache.keys().copied().collect();
            assert_eq!(keys, vec![1, 2, 3]);
        }

        #[test]
        fn eviction_works_identically_on_ordered_storage() {
            let mut cache: OrderedCache<u32, &str> = OrderedCache::new(2, CachePolicy::Lru);
            cache.insert(1, "a").unwrap();
            cache.insert(2, "b").unwrap();
            cache.insert(3, "c").unwrap();

            assert!(!cache.contains(&1));
            assert_eq!(cache.len(), 2);
        }
    }
}
