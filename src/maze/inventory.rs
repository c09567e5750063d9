//! The player's inventory: a multiset of items keyed by name.

use crate::maze::Item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A collection of picked-up items grouped by item name.
///
/// Each name maps to the instances of that item in acquisition order.
/// A name key exists iff its list is non-empty; removing the last instance
/// of a name removes the key.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::{Inventory, Item, ItemKind, Position};
///
/// let mut inventory = Inventory::new();
/// inventory.add_item(Item::new(ItemKind::Potion, Position::new(0, 1)));
/// inventory.add_item(Item::new(ItemKind::Potion, Position::new(2, 2)));
///
/// let first = inventory.remove_item("Potion").unwrap();
/// assert_eq!(first.position(), Position::new(0, 1));
/// assert!(inventory.check_item("Potion"));
///
/// inventory.remove_item("Potion");
/// assert!(!inventory.check_item("Potion"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    storage: BTreeMap<String, Vec<Item>>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item instance, keyed by its kind's name.
    pub fn add_item(&mut self, item: Item) {
        self.storage
            .entry(item.kind().name().to_string())
            .or_default()
            .push(item);
    }

    /// Removes and returns the oldest instance of the named item, or `None`
    /// if the inventory holds none. Dropping the last instance removes the
    /// name key entirely.
    pub fn remove_item(&mut self, item_name: &str) -> Option<Item> {
        let items = self.storage.get_mut(item_name)?;
        let removed = items.remove(0);
        if items.is_empty() {
            self.storage.remove(item_name);
        }
        Some(removed)
    }

    /// Returns whether at least one instance of the named item is held.
    pub fn check_item(&self, item_name: &str) -> bool {
        self.storage.contains_key(item_name)
    }

    /// Returns the oldest instance of the named item without removing it.
    pub fn get_first_item(&self, item_name: &str) -> Option<&Item> {
        self.storage.get(item_name).and_then(|items| items.first())
    }

    /// Returns the number of held instances of the named item.
    pub fn count(&self, item_name: &str) -> usize {
        self.storage.get(item_name).map_or(0, Vec::len)
    }

    /// Returns the name-to-instances mapping.
    pub fn items(&self) -> &BTreeMap<String, Vec<Item>> {
        &self.storage
    }

    /// Returns whether the inventory holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterates over every held item, grouped by name.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.storage.values().flatten()
    }
}

impl std::fmt::Display for Inventory {
    /// One `Name: count` line per held item type.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .storage
            .iter()
            .map(|(name, items)| format!("{}: {}", name, items.len()))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{ItemKind, Position};

    fn potion(row: i32) -> Item {
        Item::new(ItemKind::Potion, Position::new(row, 0))
    }

    #[test]
    fn test_add_and_remove_is_fifo() {
        let mut inventory = Inventory::new();
        inventory.add_item(potion(1));
        inventory.add_item(potion(2));
        inventory.add_item(potion(3));

        assert_eq!(inventory.count("Potion"), 3);
        assert_eq!(
            inventory.remove_item("Potion").unwrap().position(),
            Position::new(1, 0)
        );
        assert_eq!(
            inventory.remove_item("Potion").unwrap().position(),
            Position::new(2, 0)
        );
    }

    #[test]
    fn test_key_removed_when_list_empties() {
        let mut inventory = Inventory::new();
        inventory.add_item(potion(0));
        assert!(inventory.check_item("Potion"));

        inventory.remove_item("Potion");
        assert!(!inventory.check_item("Potion"));
        assert!(inventory.items().is_empty());
    }

    #[test]
    fn test_remove_absent_item() {
        let mut inventory = Inventory::new();
        assert!(inventory.remove_item("Water").is_none());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut inventory = Inventory::new();
        inventory.add_item(potion(7));
        assert!(inventory.get_first_item("Potion").is_some());
        assert_eq!(inventory.count("Potion"), 1);
    }

    #[test]
    fn test_display_counts() {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::new(ItemKind::Apple, Position::new(0, 0)));
        inventory.add_item(Item::new(ItemKind::Water, Position::new(0, 1)));
        inventory.add_item(Item::new(ItemKind::Water, Position::new(0, 2)));
        assert_eq!(inventory.to_string(), "Apple: 1\nWater: 2");
    }
}
