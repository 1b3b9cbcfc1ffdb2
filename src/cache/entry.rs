//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use crate::cache::lru::Slot;

// == Cache Entry ==
/// A stored value together with its node in the recency list.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Arena slot of this entry's recency node
    pub(crate) slot: Slot,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    pub(crate) fn new(value: T, slot: Slot) -> Self {
        Self { value, slot }
    }

    // == Replace ==
    /// Swaps in a new value, returning the previous one.
    pub(crate) fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), 3);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.slot, 3);
    }

    #[test]
    fn test_entry_replace_keeps_slot() {
        let mut entry = CacheEntry::new("old", 1);

        let previous = entry.replace("new");

        assert_eq!(previous, "old");
        assert_eq!(entry.value, "new");
        assert_eq!(entry.slot, 1);
    }
}
