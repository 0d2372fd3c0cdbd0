//! Storage backends for the cache shell.
//!
//! Stores own the key→value bindings and nothing else: eviction order,
//! frequency counts, and every other piece of policy metadata live on the
//! policy side. The shell keeps the two in lockstep by pairing every store
//! mutation with the matching policy call.
//!
//! ```text
//!   ┌─────────────────────┐              ┌─────────────────────┐
//!   │       Policy        │              │        Store        │
//!   │  (eviction order)   │◄────────────►│   (key/value data)  │
//!   └─────────────────────┘  cache shell └─────────────────────┘
//! ```
//!
//! Two backends ship: [`HashStore`] (FxHashMap, the default) and
//! [`BTreeStore`] (ordered by the key's `Ord`). Keys are unique in both;
//! inserting a duplicate leaves the stored value untouched and reports
//! failure.

pub mod btree;
pub mod hashmap;

pub use btree::BTreeStore;
pub use hashmap::HashStore;

/// Minimal key→value map interface the cache shell consumes.
///
/// Implementations must keep keys unique. `insert` reports a duplicate by
/// returning `false` and leaving the existing value in place; `remove`
/// reports the number of entries removed (0 or 1) so the shell can keep its
/// size counter exact.
pub trait Store<K, V> {
    /// Creates an empty store sized for `capacity` entries where the backing
    /// structure supports pre-sizing.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Binds `key` to `value` if `key` is absent. Returns `false` (dropping
    /// `value`) when the key is already bound.
    fn insert(&mut self, key: K, value: V) -> bool;

    /// Returns the value bound to `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Removes the binding for `key`. Returns how many entries were removed
    /// (0 or 1).
    fn remove(&mut self, key: &K) -> usize;

    /// Returns `true` if `key` is bound.
    fn contains(&self, key: &K) -> bool;

    /// Number of bindings.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no bindings.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every binding.
    fn clear(&mut self);

    /// Iterates over bound keys. Order is backend-defined.
    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K> + 'a
    where
        K: 'a;

    /// Exchanges all bindings with `other`.
    fn swap(&mut self, other: &mut Self)
    where
        Self: Sized,
    {
        std::mem::swap(self, other);
    }
}
