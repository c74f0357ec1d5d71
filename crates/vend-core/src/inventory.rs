//! # Inventory
//!
//! The owned, in-memory keyed snack collection that every store
//! implementation wraps.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Inventory                                    │
//! │                                              │
//! │  snacks: BTreeMap<SnackKey, Snack>           │
//! │   1 → Mars    5  0.70                        │
//! │   3 → Twix    2  0.80     (2 was removed)    │
//! │                                              │
//! │  next_key: 4                                 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Keys come from `next_key` and are never handed out twice by the same
//! inventory. Only [`Inventory::replace_all`] (a bulk load) resets the key
//! space.

use std::collections::BTreeMap;

use crate::types::{Snack, SnackKey};

/// Keyed snack storage with monotonic key assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    snacks: BTreeMap<SnackKey, Snack>,
    next_key: SnackKey,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory {
            snacks: BTreeMap::new(),
            next_key: 1,
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `snack` under a fresh key and returns the key.
    pub fn insert(&mut self, snack: Snack) -> SnackKey {
        let key = self.next_key;
        self.next_key += 1;
        self.snacks.insert(key, snack);
        key
    }

    pub fn get(&self, key: SnackKey) -> Option<&Snack> {
        self.snacks.get(&key)
    }

    pub fn contains(&self, key: SnackKey) -> bool {
        self.snacks.contains_key(&key)
    }

    /// Overwrites the snack at `key`. Returns false, changing nothing, if
    /// the key is absent.
    pub fn replace(&mut self, key: SnackKey, snack: Snack) -> bool {
        match self.snacks.get_mut(&key) {
            Some(slot) => {
                *slot = snack;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: SnackKey) -> Option<Snack> {
        self.snacks.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snacks.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (SnackKey, &Snack)> {
        self.snacks.iter().map(|(key, snack)| (*key, snack))
    }

    /// An owned copy of every entry.
    pub fn snapshot(&self) -> BTreeMap<SnackKey, Snack> {
        self.snacks.clone()
    }

    /// Swaps in a whole new key space, as after a bulk load.
    ///
    /// `next_key` is raised past the largest loaded key if needed.
    pub fn replace_all(&mut self, snacks: BTreeMap<SnackKey, Snack>, next_key: SnackKey) {
        let floor = snacks.keys().next_back().map_or(1, |last| last + 1);
        self.next_key = next_key.max(floor);
        self.snacks = snacks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn snack(name: &str, count: u32) -> Snack {
        Snack::new(name, count, Money::from_pence(50))
    }

    #[test]
    fn test_keys_are_assigned_in_insertion_order() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.insert(snack("Mars", 5)), 1);
        assert_eq!(inventory.insert(snack("Twix", 3)), 2);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_keys_are_not_reused_after_remove() {
        let mut inventory = Inventory::new();
        inventory.insert(snack("Mars", 5));
        let twix = inventory.insert(snack("Twix", 3));
        inventory.remove(twix);

        assert_eq!(inventory.insert(snack("Bounty", 1)), 3);
        assert!(!inventory.contains(twix));
    }

    #[test]
    fn test_replace_keeps_key() {
        let mut inventory = Inventory::new();
        let key = inventory.insert(snack("Mars", 5));

        assert!(inventory.replace(key, snack("Mars XL", 2)));
        assert_eq!(inventory.get(key).unwrap().name, "Mars XL");
        assert!(!inventory.replace(99, snack("Ghost", 1)));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_replace_all_raises_next_key_past_loaded_keys() {
        let mut inventory = Inventory::new();
        let mut loaded = BTreeMap::new();
        loaded.insert(4, snack("Mars", 5));
        loaded.insert(7, snack("Twix", 1));

        inventory.replace_all(loaded, 2);
        assert_eq!(inventory.insert(snack("Bounty", 1)), 8);

        inventory.replace_all(BTreeMap::new(), 10);
        assert!(inventory.is_empty());
        assert_eq!(inventory.insert(snack("KitKat", 1)), 10);
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let mut inventory = Inventory::new();
        inventory.insert(snack("b", 1));
        inventory.insert(snack("a", 1));
        let names: Vec<&str> = inventory.iter().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
