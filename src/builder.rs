//! Cache builder for all eviction policies and both storage backends.
//!
//! A thin construction front end: pick a capacity, pick a policy, get a
//! cache. The builder exists so call sites choosing policies at runtime
//! (config files, CLI flags) have one place to go through, and so the
//! zero-capacity validation has a non-panicking path.
//!
//! ## Example
//!
//! ```
//! use evictkit::builder::CacheBuilder;
//! use evictkit::policy::CachePolicy;
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lru);
//! cache.insert(1, "hello".to_string()).unwrap();
//! assert_eq!(cache.fetch(&1).unwrap(), "hello");
//! ```

use std::hash::Hash;

use crate::cache::{HashCache, OrderedCache};
use crate::error::ConfigError;
use crate::policy::CachePolicy;

/// Builder for cache instances.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Starts a builder for caches holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds a hash-backed cache with the given policy.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero; use
    /// [`try_build`](CacheBuilder::try_build) to validate instead.
    pub fn build<K, V>(self, policy: CachePolicy) -> HashCache<K, V>
    where
        K: Ord + Hash + Clone,
    {
        HashCache::new(self.capacity, policy)
    }

    /// Builds a hash-backed cache, reporting invalid configuration.
    pub fn try_build<K, V>(self, policy: CachePolicy) -> Result<HashCache<K, V>, ConfigError>
    where
        K: Ord + Hash + Clone,
    {
        HashCache::try_new(self.capacity, policy)
    }

    /// Builds a cache with ordered storage with the given policy.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero; use
    /// [`try_build_ordered`](CacheBuilder::try_build_ordered) instead.
    pub fn build_ordered<K, V>(self, policy: CachePolicy) -> OrderedCache<K, V>
    where
        K: Ord + Hash + Clone,
    {
        OrderedCache::new(self.capacity, policy)
    }

    /// Builds a cache with ordered storage, reporting invalid configuration.
    pub fn try_build_ordered<K, V>(
        self,
        policy: CachePolicy,
    ) -> Result<OrderedCache<K, V>, ConfigError>
    where
        K: Ord + Hash + Clone,
    {
        OrderedCache::try_new(self.capacity, policy)
    }
}
