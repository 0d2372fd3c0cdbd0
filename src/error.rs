//! Error types for the evictkit library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by fallible cache operations. Covers the three
//!   failure modes of the cache shell: a full cache whose policy cannot name
//!   a victim, a lookup for a key that is not resident, and an attempt to
//!   swap caches driven by different policy variants.
//! - [`ConfigError`]: Returned when cache configuration parameters are
//!   invalid (e.g. zero capacity).
//!
//! Idempotent operations (`touch`, `erase`, `remove` on missing keys) never
//! fail and therefore have no error representation here.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::error::CacheError;
//! use evictkit::policy::CachePolicy;
//! use evictkit::HashCache;
//!
//! let mut cache: HashCache<u32, &str> = HashCache::new(1, CachePolicy::Lru);
//! cache.insert(1, "one").unwrap();
//!
//! let err = cache.fetch(&2).unwrap_err();
//! assert_eq!(err, CacheError::InvalidKey(2));
//! ```

use std::fmt;

/// Convenience alias for results of fallible cache operations.
pub type CacheResult<T, K> = Result<T, CacheError<K>>;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned by fallible cache operations.
///
/// The shell never retries and never catches its own errors; every variant
/// surfaces to the caller at the first boundary, with the cache left in the
/// state documented on the operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError<K> {
    /// The cache is at capacity and the policy's `victim()` returned no key.
    ///
    /// Produced by `insert`. The insertion has had no effect when this
    /// surfaces. Reachable with the LFU* family, whose victim selection is
    /// restricted to keys with a reference count of exactly 1.
    CacheFull,

    /// The requested key is not resident in the cache.
    ///
    /// Produced by `fetch`; carries the offending key for diagnostics. Also
    /// reserved for policies that reject keys on `insert` (none of the
    /// shipped policies do).
    InvalidKey(K),

    /// Two caches with structurally different policy variants were asked to
    /// swap state.
    ///
    /// Produced by `swap`. Neither cache is modified when this surfaces.
    InvalidPolicy,
}

impl<K> CacheError<K> {
    /// Returns the offending key for [`CacheError::InvalidKey`], if any.
    pub fn invalid_key(&self) -> Option<&K> {
        match self {
            CacheError::InvalidKey(key) => Some(key),
            _ => None,
        }
    }
}

impl<K> fmt::Display for CacheError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::CacheFull => f.write_str(
                "cache is full and the policy cannot select a victim; remove entries manually",
            ),
            CacheError::InvalidKey(_) => f.write_str("key is not present in the cache"),
            CacheError::InvalidPolicy => {
                f.write_str("attempted to swap caches with incompatible policies")
            },
        }
    }
}

impl<K: fmt::Debug> std::error::Error for CacheError<K> {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as `Cache::try_new` and the
/// builder's `try_build` methods. Carries a human-readable description of
/// which parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
