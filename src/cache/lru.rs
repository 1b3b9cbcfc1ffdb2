//! Recency List Module
//!
//! Arena-backed doubly-linked list tracking access order for LRU eviction.

use crate::cache::CacheKey;

/// Position of a node inside the arena.
pub type Slot = usize;

#[derive(Debug, Clone)]
struct Node {
    key: CacheKey,
    prev: Option<Slot>,
    next: Option<Slot>,
}

// == Recency List ==
/// Tracks access order for LRU eviction strategy.
///
/// Nodes live in a `Vec` and link to each other by index:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Slots of removed nodes are recycled through a free list, so every
/// operation is O(1) given the slot of the node it touches.
#[derive(Debug, Default)]
pub struct RecencyList {
    nodes: Vec<Option<Node>>,
    free: Vec<Slot>,
    head: Option<Slot>,
    tail: Option<Slot>,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    // == Push Front ==
    /// Inserts `key` as the most recently used and returns its slot.
    pub fn push_front(&mut self, key: CacheKey) -> Slot {
        let node = Node {
            key,
            prev: None,
            next: self.head,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
        slot
    }

    // == Move To Front ==
    /// Marks the node at `slot` as most recently used.
    ///
    /// The node is unlinked from its current position before being relinked
    /// at the head, so a key never appears twice.
    pub fn move_to_front(&mut self, slot: Slot) {
        if self.head == Some(slot) {
            return;
        }
        self.unlink(slot);

        let old_head = self.head;
        {
            let node = self.node_mut(slot);
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => self.node_mut(h).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    // == Remove ==
    /// Removes the node at `slot`, returning its key.
    ///
    /// Returns None if the slot is vacant.
    pub fn remove(&mut self, slot: Slot) -> Option<CacheKey> {
        if self.nodes.get(slot)?.is_none() {
            return None;
        }
        self.unlink(slot);
        let node = self.nodes[slot].take()?;
        self.free.push(slot);
        self.len -= 1;
        Some(node.key)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<CacheKey> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Peek ==
    /// Returns the least recently used key without removing it.
    pub fn peek_back(&self) -> Option<CacheKey> {
        self.tail.and_then(|slot| self.key_at(slot))
    }

    /// Returns the most recently used key.
    pub fn peek_front(&self) -> Option<CacheKey> {
        self.head.and_then(|slot| self.key_at(slot))
    }

    /// Returns the key stored at `slot`, if occupied.
    pub fn key_at(&self, slot: Slot) -> Option<CacheKey> {
        self.nodes.get(slot)?.as_ref().map(|node| node.key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iteration ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn unlink(&mut self, slot: Slot) {
        let (prev, next) = match &self.nodes[slot] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
    }

    // Linked slots are always occupied; a vacant one here is a broken list.
    fn node_mut(&mut self, slot: Slot) -> &mut Node {
        match self.nodes[slot].as_mut() {
            Some(node) => node,
            None => unreachable!("recency list links to vacant slot {slot}"),
        }
    }
}

// == Iterator ==
/// Iterator over keys in recency order, head first.
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: Option<Slot>,
}

impl Iterator for Iter<'_> {
    type Item = CacheKey;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = self.list.nodes[slot].as_ref()?;
        self.cursor = node.next;
        Some(node.key)
    }
}
