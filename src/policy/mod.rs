//! Eviction policies and their uniform contract.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────┐
//!   │                      ReplacementPolicy<K>                      │
//!   │                                                                │
//!   │   insert(&K) → Result     remove(&K)      touch(&K)            │
//!   │   victim() → Victim<K>    clear()         len() / contains()   │
//!   └───────────────────────────────┬────────────────────────────────┘
//!                                   │ implemented by
//!        ┌──────────┬──────────┬────┴─────┬───────────┬──────────────┐
//!        ▼          ▼          ▼          ▼           ▼              ▼
//!     NonePolicy LruPolicy MruPolicy  LfuPolicy  LfuStarPolicy  AdaptivePolicy
//!                                         │
//!                              LfuAgingPolicy / LfuStarAgingPolicy
//!                              (composition: aging clock + LFU core)
//! ```
//!
//! The cache shell does not hold a trait object. It holds the tagged
//! [`Policy`] enum, which dispatches every contract method with a `match`
//! and implements `try_swap` by pairing identical variants. Swapping two
//! different variants fails with [`CacheError::InvalidPolicy`] without
//! touching either side; there is no runtime type identification anywhere.
//!
//! ## Shared contract
//!
//! | Op        | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `insert`  | starts tracking an untracked key                           |
//! | `remove`  | stops tracking; no-op for untracked keys                   |
//! | `touch`   | records an access; no-op for untracked keys                |
//! | `victim`  | names a tracked key to evict, or nothing                   |
//! | `clear`   | drops all tracking state                                   |
//!
//! Every policy keeps its tracked key set equal to the cache's resident key
//! set; the shell maintains that pointwise by pairing every storage mutation
//! with the matching policy call.
//!
//! ## Choosing a policy
//!
//! | Variant          | Victim selection                | Can refuse?       |
//! |------------------|---------------------------------|-------------------|
//! | `None`           | arbitrary tracked key           | no                |
//! | `Lru`            | least recently used             | no                |
//! | `Mru`            | most recently used              | no                |
//! | `Lfu`            | smallest reference count        | no                |
//! | `LfuStar`        | reference count exactly 1       | yes               |
//! | `LfuAging`       | LFU after periodic count decay  | no                |
//! | `LfuStarAging`   | LFU* after periodic count decay | yes               |
//! | `Adaptive`       | larger of recency/frequency side| no                |

pub mod adaptive;
pub mod lfu;
pub mod lfu_aging;
pub mod lfu_star;
pub mod lfu_star_aging;
pub mod lru;
pub mod mru;
pub mod none;

use std::hash::Hash;
use std::time::Duration;

pub use adaptive::AdaptivePolicy;
pub use lfu::LfuPolicy;
pub use lfu_aging::{AgingClock, LfuAgingPolicy};
pub use lfu_star::LfuStarPolicy;
pub use lfu_star_aging::LfuStarAgingPolicy;
pub use lru::LruPolicy;
pub use mru::MruPolicy;
pub use none::NonePolicy;

use crate::error::CacheError;
use crate::victim::Victim;

/// The uniform contract every eviction policy implements.
///
/// Policies track keys only; values never cross this boundary. All
/// operations are total: `remove` and `touch` on untracked keys are no-ops,
/// and `victim` reports "nothing to evict" through an empty [`Victim`]
/// rather than failing.
pub trait ReplacementPolicy<K> {
    /// Starts tracking `key` with the policy's initial state.
    ///
    /// The caller guarantees `key` is not currently tracked. Returns
    /// [`CacheError::InvalidKey`] if the policy rejects the key; none of the
    /// shipped policies do, the error is reserved for custom policies.
    fn insert(&mut self, key: &K) -> Result<(), CacheError<K>>;

    /// Stops tracking `key`. Idempotent.
    fn remove(&mut self, key: &K);

    /// Records an access to `key`, updating recency or frequency state.
    /// A no-op for untracked keys.
    fn touch(&mut self, key: &K);

    /// Drops all tracking state.
    fn clear(&mut self);

    /// Selects a tracked key for eviction, or returns an empty victim when
    /// the policy cannot evict anything right now.
    ///
    /// Takes `&mut self` because aging policies run their decay pass here.
    fn victim(&mut self) -> Victim<K>;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    /// Returns `true` if no keys are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is tracked.
    fn contains(&self, key: &K) -> bool;
}

// ---------------------------------------------------------------------------
// Policy configuration
// ---------------------------------------------------------------------------

/// Which eviction policy a cache should be built with.
///
/// Passed to `Cache::new` and the builder; the aging variants carry their
/// decay interval.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use evictkit::policy::CachePolicy;
/// use evictkit::HashCache;
///
/// let lru: HashCache<u32, &str> = HashCache::new(100, CachePolicy::Lru);
/// let aging: HashCache<u32, &str> = HashCache::new(
///     100,
///     CachePolicy::LfuAging { interval: Duration::from_secs(3600) },
/// );
/// # let _ = (lru, aging);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// No usage tracking; evicts an arbitrary resident key.
    None,
    /// Least Recently Used.
    Lru,
    /// Most Recently Used.
    Mru,
    /// Least Frequently Used.
    Lfu,
    /// LFU restricted to reference count 1; may refuse to evict.
    LfuStar,
    /// LFU with periodic decay of all reference counts.
    LfuAging {
        /// How long between decay passes.
        interval: Duration,
    },
    /// LFU* with periodic decay; may refuse to evict.
    LfuStarAging {
        /// How long between decay passes.
        interval: Duration,
    },
    /// Simplified Adaptive Replacement (recency and frequency sides with
    /// ghost histories).
    Adaptive,
}

// ---------------------------------------------------------------------------
// Tagged policy engine
// ---------------------------------------------------------------------------

/// A concrete eviction policy behind a tagged variant.
///
/// The variant is fixed when the owning cache is constructed. `swap`
/// compatibility is decided by matching variant pairs, which is what makes
/// [`CacheError::InvalidPolicy`] reachable at runtime between two caches of
/// the same Rust type.
#[derive(Debug, Clone)]
pub enum Policy<K> {
    /// See [`NonePolicy`].
    None(NonePolicy<K>),
    /// See [`LruPolicy`].
    Lru(LruPolicy<K>),
    /// See [`MruPolicy`].
    Mru(MruPolicy<K>),
    /// See [`LfuPolicy`].
    Lfu(LfuPolicy<K>),
    /// See [`LfuStarPolicy`].
    LfuStar(LfuStarPolicy<K>),
    /// See [`LfuAgingPolicy`].
    LfuAging(LfuAgingPolicy<K>),
    /// See [`LfuStarAgingPolicy`].
    LfuStarAging(LfuStarAgingPolicy<K>),
    /// See [`AdaptivePolicy`].
    Adaptive(AdaptivePolicy<K>),
}

impl<K> Policy<K>
where
    K: Ord + Hash + Clone,
{
    /// Builds the policy named by `config`, pre-sized for `capacity` keys.
    ///
    /// Every concrete policy accepts the capacity hint; the adaptive policy
    /// additionally derives its ghost-list bound from it.
    pub fn new(config: CachePolicy, capacity: usize) -> Self {
        match config {
            CachePolicy::None => Policy::None(NonePolicy::new(capacity)),
            CachePolicy::Lru => Policy::Lru(LruPolicy::new(capacity)),
            CachePolicy::Mru => Policy::Mru(MruPolicy::new(capacity)),
            CachePolicy::Lfu => Policy::Lfu(LfuPolicy::new(capacity)),
            CachePolicy::LfuStar => Policy::LfuStar(LfuStarPolicy::new(capacity)),
            CachePolicy::LfuAging { interval } => {
                Policy::LfuAging(LfuAgingPolicy::new(capacity, interval))
            },
            CachePolicy::LfuStarAging { interval } => {
                Policy::LfuStarAging(LfuStarAgingPolicy::new(capacity, interval))
            },
            CachePolicy::Adaptive => Policy::Adaptive(AdaptivePolicy::new(capacity)),
        }
    }

    /// Exchanges internal state with `other`.
    ///
    /// Fails with [`CacheError::InvalidPolicy`] when the variants differ;
    /// neither policy is modified in that case. For the aging variants the
    /// whole aging clock (interval and last-pass timestamp) travels with the
    /// state.
    pub fn try_swap(&mut self, other: &mut Policy<K>) -> Result<(), CacheError<K>> {
        use std::mem::swap;
        match (self, other) {
            (Policy::None(a), Policy::None(b)) => swap(a, b),
            (Policy::Lru(a), Policy::Lru(b)) => swap(a, b),
            (Policy::Mru(a), Policy::Mru(b)) => swap(a, b),
            (Policy::Lfu(a), Policy::Lfu(b)) => swap(a, b),
            (Policy::LfuStar(a), Policy::LfuStar(b)) => swap(a, b),
            (Policy::LfuAging(a), Policy::LfuAging(b)) => swap(a, b),
            (Policy::LfuStarAging(a), Policy::LfuStarAging(b)) => swap(a, b),
            (Policy::Adaptive(a), Policy::Adaptive(b)) => swap(a, b),
            _ => return Err(CacheError::InvalidPolicy),
        }
        Ok(())
    }
}

impl<K> ReplacementPolicy<K> for Policy<K>
where
    K: Ord + Hash + Clone,
{
    fn insert(&mut self, key: &K) -> Result<(), CacheError<K>> {
        match self {
            Policy::None(p) => p.insert(key),
            Policy::Lru(p) => p.insert(key),
            Policy::Mru(p) => p.insert(key),
            Policy::Lfu(p) => p.insert(key),
            Policy::LfuStar(p) => p.insert(key),
            Policy::LfuAging(p) => p.insert(key),
            Policy::LfuStarAging(p) => p.insert(key),
            Policy::Adaptive(p) => p.insert(key),
        }
    }

    fn remove(&mut self, key: &K) {
        match self {
            Policy::None(p) => p.remove(key),
            Policy::Lru(p) => p.remove(key),
            Policy::Mru(p) => p.remove(key),
            Policy::Lfu(p) => p.remove(key),
            Policy::LfuStar(p) => p.remove(key),
            Policy::LfuAging(p) => p.remove(key),
            Policy::LfuStarAging(p) => p.remove(key),
            Policy::Adaptive(p) => p.remove(key),
        }
    }

    fn touch(&mut self, key: &K) {
        match self {
            Policy::None(p) => p.touch(key),
            Policy::Lru(p) => p.touch(key),
            Policy::Mru(p) => p.touch(key),
            Policy::Lfu(p) => p.touch(key),
            Policy::LfuStar(p) => p.touch(key),
            Policy::LfuAging(p) => p.touch(key),
            Policy::LfuStarAging(p) => p.touch(key),
            Policy::Adaptive(p) => p.touch(key),
        }
    }

    fn clear(&mut self) {
        match self {
            Policy::None(p) => p.clear(),
            Policy::Lru(p) => p.clear(),
            Policy::Mru(p) => p.clear(),
            Policy::Lfu(p) => p.clear(),
            Policy::LfuStar(p) => p.clear(),
            Policy::LfuAging(p) => p.clear(),
            Policy::LfuStarAging(p) => p.clear(),
            Policy::Adaptive(p) => p.clear(),
        }
    }

    fn victim(&mut self) -> Victim<K> {
        match self {
            Policy::None(p) => p.victim(),
            Policy::Lru(p) => p.victim(),
            Policy::Mru(p) => p.victim(),
            Policy::Lfu(p) => p.victim(),
            Policy::LfuStar(p) => p.victim(),
            Policy::LfuAging(p) => p.victim(),
            Policy::LfuStarAging(p) => p.victim(),
            Policy::Adaptive(p) => p.victim(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Policy::None(p) => p.len(),
            Policy::Lru(p) => p.len(),
            Policy::Mru(p) => p.len(),
            Policy::Lfu(p) => p.len(),
            Policy::LfuStar(p) => p.len(),
            Policy::LfuAging(p) => p.len(),
            Policy::LfuStarAging(p) => p.len(),
            Policy::Adaptive(p) => p.len(),
        }
    }

    fn contains(&self, key: &K) -> bool {
        match self {
            Policy::None(p) => p.contains(key),
            Policy::Lru(p) => p.contains(key),
            Policy::Mru(p) => p.contains(key),
            Policy::Lfu(p) => p.contains(key),
            Policy::LfuStar(p) => p.contains(key),
            Policy::LfuAging(p) => p.contains(key),
            Policy::LfuStarAging(p) => p.contains(key),
            Policy::Adaptive(p) => p.contains(key),
        }
    }
}
