//! Hash-backed store, the default backend.
//!
//! Wraps an `FxHashMap` for O(1) average lookup. Use when keys hash well and
//! no key ordering is needed; see [`BTreeStore`](crate::store::BTreeStore)
//! for the ordered alternative.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::store::Store;

/// Key→value store backed by a hash map.
#[derive(Debug, Clone)]
pub struct HashStore<K, V> {
    map: FxHashMap<K, V>,
}

impl<K, V> Store<K, V> for HashStore<K, V>
where
    K: Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
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
