//! Doubly-linked recency list over a [`SlotArena`].
//!
//! The ordering structure behind the LRU and MRU policies: keys sit in a
//! linked list from most-recent (front) to least-recent (back), and the
//! owning policy keeps a key to `SlotId` index so any key can be unlinked or
//! respliced to the front in O(1) without scanning.
//!
//! ```text
//!   head ──► [k₄] ◄──► [k₂] ◄──► [k₇] ◄── tail
//!            front                 back
//!            (MRU)                 (LRU)
//! ```
//!
//! Nodes are arena slots linked by `SlotId`, so handles held by the policy's
//! index never dangle and no raw pointers are involved.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Recency-ordered list of keys with stable node handles.
#[derive(Debug, Clone)]
pub struct KeyList<K> {
    arena: SlotArena<Node<K>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<K> KeyList<K> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list pre-sized for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Number of keys in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// The most recently promoted key, if any.
    pub fn front(&self) -> Option<&K> {
        self.head.and_then(|id| self.arena.get(id)).map(|n| &n.key)
    }

    /// The least recently promoted key, if any.
    pub fn back(&self) -> Option<&K> {
        self.tail.and_then(|id| self.arena.get(id)).map(|n| &n.key)
    }

    /// Links a new key at the front and returns its handle.
    pub fn push_front(&mut self, key: K) -> SlotId {
        let id = self.arena.insert(Node {
            key,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => {
                if let Some(node) = self.arena.get_mut(old_head) {
                    node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Unlinks the node at `id` and returns its key, or `None` for a dead
    /// handle.
    pub fn remove(&mut self, id: SlotId) -> Option<K> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.key)
    }

    /// Moves the node at `id` to the front. A no-op for dead handles.
    pub fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) {
            return;
        }
        if self.detach(id).is_none() {
            return;
        }
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = self.head;
        }
        if let Some(old_head) = self.head {
            if let Some(node) = self.arena.get_mut(old_head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates keys from front (most recent) to back (least recent).
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let id = current?;
            let node = self.arena.get(id)?;
            current = node.next;
            Some(&node.key)
        })
    }

    /// Unlinks `id` from the chain without freeing the slot. Returns `None`
    /// for dead handles.
    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };
        match prev {
            Some(p) => {
                if let Some(node) = self.arena.get_mut(p) {
                    node.next = next;
                }
            },
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.arena.get_mut(n) {
                    node.prev = prev;
                }
            },
            None => self.tail = prev,
        }
        Some(())
    }
}

impl<K> Default for KeyList<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &KeyList<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_front_orders_most_recent_first() {
        let mut list = KeyList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(collect(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
    }

    #[test]
    fn remove_middle_keeps_links() {
        let mut list = KeyList::new();
        list.push_front(1);
        let mid = list.push_front(2);
        list.push_front(3);

        assert_eq!(list.remove(mid), Some(2));
        assert_eq!(collect(&list), vec![3, 1]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_endpoints_updates_head_and_tail() {
        let mut list = KeyList::new();
        let tail = list.push_front(1);
        list.push_front(2);
        let head = list.push_front(3);

        assert_eq!(list.remove(head), Some(3));
        assert_eq!(list.front(), Some(&2));

        assert_eq!(list.remove(tail), Some(1));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(collect(&list), vec![2]);
    }

    #[test]
    fn move_to_front_resplices() {
        let mut list = KeyList::new();
        let oldest = list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        list.move_to_front(oldest);
        assert_eq!(collect(&list), vec![1, 3, 2]);
        assert_eq!(list.back(), Some(&2));

        // Already at front: nothing changes.
        list.move_to_front(oldest);
        assert_eq!(collect(&list), vec![1, 3, 2]);
    }

    #[test]
    fn single_element_list() {
        let mut list = KeyList::new();
        let only = list.push_front(42);

        assert_eq!(list.front(), list.back());
        list.move_to_front(only);
        assert_eq!(collect(&list), vec![42]);

        assert_eq!(list.remove(only), Some(42));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn dead_handles_are_ignored() {
        let mut list = KeyList::new();
        let id = list.push_front(1);
        list.remove(id);

        assert_eq!(list.remove(id), None);
        list.move_to_front(id);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut list = KeyList::new();
        list.push_front(1);
        list.push_front(2);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(collect(&list), Vec::<u32>::new());
    }
}
