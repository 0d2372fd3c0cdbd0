//! Ordered store backed by a B-tree.
//!
//! Keeps bindings sorted by the key's `Ord`, so `keys()` iterates in
//! ascending order. Slightly slower lookups than
//! [`HashStore`](crate::store::HashStore); use when deterministic key
//! traversal matters or keys hash poorly.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::store::Store;

/// Key→value store backed by a `BTreeMap`.
#[derive(Debug, Clone)]
pub struct BTreeStore<K, V> {
    map: BTreeMap<K, V>,
}

impl<K, V> Store<K, V> for BTreeStore<K, V>
where
    K: Ord,
{
    fn with_capacity(_capacity: usize) -> Self {
        // B-trees allocate per node; there is nothing to pre-size.
        Self {
            map: BTreeMap::new(),
        }
    }

    fn insert(&mut self, key: K, value: V) -> bool {
        match self.map.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            },
        }
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    fn remove(&mut self, key: &K) -> usize {
        usize::from(self.map.remove(key).is_some())
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K> + 'a
    where
        K: 'a,
    {
        self.map.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_iterate_in_order() {
        let mut store: BTreeStore<u32, &str> = BTreeStore::with_capacity(0);
        store.insert(3, "c");
        store.insert(1, "a");
        store.insert(2, "b");

        let keys: Vec<u32> = store.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn insert_rejects_duplicates_and_keeps_original() {
        let mut store: BTreeStore<u32, &str> = BTreeStore::with_capacity(0);

        assert!(store.insert(1, "first"));
        assert!(!store.insert(1, "second"));
        assert_eq!(store.get(&1), Some(&"first"));
    }

    #[test]
    fn remove_reports_count() {
        let mut store: BTreeStore<u32, &str> = BTreeStore::with_capacity(0);
        store.insert(1, "one");

        assert_eq!(store.remove(&1), 1);
        assert_eq!(store.remove(&1), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a: BTreeStore<u32, &str> = BTreeStore::with_capacity(0);
        let mut b: BTreeStore<u32, &str> = BTreeStore::with_capacity(0);
        a.insert(1, "a");
        b.insert(2, "b");

        a.swap(&mut b);

        assert_eq!(a.get(&2), Some(&"b"));
        assert_eq!(b.get(&1), Some(&"a"));
    }
}
