//! The player: the sole dynamic entity, with bounded stats and an inventory.

use crate::config::{MAX_HEALTH, MAX_HUNGER, MAX_THIRST, MIN_STAT};
use crate::maze::{Inventory, Item, ItemKind, Position};
use serde::{Deserialize, Serialize};

/// A snapshot of the player's (health, hunger, thirst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: i32,
    pub hunger: i32,
    pub thirst: i32,
}

/// The user-controlled entity.
///
/// Health lives in `[0, 100]`, hunger and thirst in `[0, 10]`; every stat
/// mutation clamps to its range. Higher hunger/thirst numbers are worse;
/// hitting either ceiling (or zero health) loses the game.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::{Player, Position};
///
/// let mut player = Player::new(Position::new(1, 1));
/// assert_eq!(player.health(), 100);
/// player.change_health(50);
/// assert_eq!(player.health(), 100); // clamped at the ceiling
/// player.change_health(-300);
/// assert_eq!(player.health(), 0); // clamped at the floor
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    position: Position,
    health: i32,
    hunger: i32,
    thirst: i32,
    inventory: Inventory,
}

impl Player {
    /// Creates a player at the given start position with full health and no
    /// hunger or thirst.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: MAX_HEALTH,
            hunger: MIN_STAT,
            thirst: MIN_STAT,
            inventory: Inventory::new(),
        }
    }

    /// Returns the player's current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the player to a new position.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Returns the player's current health.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Returns the player's current hunger.
    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    /// Returns the player's current thirst.
    pub fn thirst(&self) -> i32 {
        self.thirst
    }

    /// Returns a snapshot of all three stats.
    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            health: self.health,
            hunger: self.hunger,
            thirst: self.thirst,
        }
    }

    /// Changes health by the given amount, clamped to `[0, 100]`.
    pub fn change_health(&mut self, amount: i32) {
        self.health = (self.health + amount).clamp(MIN_STAT, MAX_HEALTH);
    }

    /// Changes hunger by the given amount, clamped to `[0, 10]`.
    pub fn change_hunger(&mut self, amount: i32) {
        self.hunger = (self.hunger + amount).clamp(MIN_STAT, MAX_HUNGER);
    }

    /// Changes thirst by the given amount, clamped to `[0, 10]`.
    pub fn change_thirst(&mut self, amount: i32) {
        self.thirst = (self.thirst + amount).clamp(MIN_STAT, MAX_THIRST);
    }

    /// Returns the player's inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the player's inventory mutably.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Adds an item to the player's inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.add_item(item);
    }

    /// Applies the named item's effect and consumes one instance, unless the
    /// item is a coin (coins are never consumed).
    ///
    /// Returns `false`, leaving all state unchanged, when no instance of the
    /// named item is held.
    pub fn use_item(&mut self, item_name: &str) -> bool {
        let kind = match self.inventory.get_first_item(item_name) {
            Some(item) => item.kind(),
            None => return false,
        };
        let effect = kind.effect();
        self.change_health(effect.health);
        self.change_hunger(effect.hunger);
        self.change_thirst(effect.thirst);
        if kind != ItemKind::Coin {
            self.inventory.remove_item(item_name);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(Position::new(0, 0))
    }

    #[test]
    fn test_initial_stats() {
        let player = player();
        assert_eq!(
            player.stats(),
            PlayerStats {
                health: 100,
                hunger: 0,
                thirst: 0
            }
        );
    }

    #[test]
    fn test_use_item_applies_effect_and_consumes() {
        let mut player = player();
        player.change_health(-50);
        player.add_item(Item::new(ItemKind::Potion, Position::new(0, 1)));

        assert!(player.use_item("Potion"));
        assert_eq!(player.health(), 70);
        assert!(!player.inventory().check_item("Potion"));
    }

    #[test]
    fn test_coins_are_never_consumed() {
        let mut player = player();
        player.add_item(Item::new(ItemKind::Coin, Position::new(0, 1)));

        assert!(player.use_item("Coin"));
        assert!(player.inventory().check_item("Coin"));
        assert_eq!(player.stats(), self::player().stats());
    }

    #[test]
    fn test_use_absent_item_is_noop() {
        let mut player = player();
        assert!(!player.use_item("Water"));
        assert_eq!(player.stats(), self::player().stats());
    }

    proptest! {
        #[test]
        fn stat_changes_stay_clamped(deltas in proptest::collection::vec(-250i32..250, 0..60)) {
            let mut player = Player::new(Position::new(0, 0));
            for delta in deltas {
                player.change_health(delta);
                player.change_hunger(delta);
                player.change_thirst(delta);
                prop_assert!((0..=100).contains(&player.health()));
                prop_assert!((0..=10).contains(&player.hunger()));
                prop_assert!((0..=10).contains(&player.thirst()));
            }
        }
    }
}
