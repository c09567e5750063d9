//! Collectible items and their fixed stat effects.

use crate::config::{APPLE_AMOUNT, HONEY_AMOUNT, POTION_AMOUNT, WATER_AMOUNT};
use crate::maze::Position;
use serde::{Deserialize, Serialize};

/// Identifier character for coins.
pub const COIN_ID: char = 'C';
/// Identifier character for potions.
pub const POTION_ID: char = 'M';
/// Identifier character for honey.
pub const HONEY_ID: char = 'H';
/// Identifier character for apples.
pub const APPLE_ID: char = 'A';
/// Identifier character for water.
pub const WATER_ID: char = 'W';

/// Names of every collectible item. Used to validate `i <item name>`
/// commands.
pub const ITEM_NAMES: [&str; 5] = ["Potion", "Coin", "Water", "Apple", "Honey"];

/// The fixed stat change an item applies when used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEffect {
    pub health: i32,
    pub hunger: i32,
    pub thirst: i32,
}

/// The closed set of collectible item types.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::ItemKind;
///
/// assert_eq!(ItemKind::from_id('M'), Some(ItemKind::Potion));
/// assert_eq!(ItemKind::Potion.effect().health, 20);
/// assert_eq!(ItemKind::Coin.name(), "Coin");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores 20 health
    Potion,
    /// No stat effect; gates the level door and is never consumed
    Coin,
    /// Quenches 5 thirst
    Water,
    /// Sates 1 hunger
    Apple,
    /// Sates 5 hunger
    Honey,
}

impl ItemKind {
    /// Maps a game-file character to an item kind, if it names one.
    pub fn from_id(id: char) -> Option<Self> {
        match id {
            POTION_ID => Some(ItemKind::Potion),
            COIN_ID => Some(ItemKind::Coin),
            WATER_ID => Some(ItemKind::Water),
            APPLE_ID => Some(ItemKind::Apple),
            HONEY_ID => Some(ItemKind::Honey),
            _ => None,
        }
    }

    /// Maps an item name back to its kind, if it names one.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Potion" => Some(ItemKind::Potion),
            "Coin" => Some(ItemKind::Coin),
            "Water" => Some(ItemKind::Water),
            "Apple" => Some(ItemKind::Apple),
            "Honey" => Some(ItemKind::Honey),
            _ => None,
        }
    }

    /// Returns the identifier character for this item kind.
    pub fn id(self) -> char {
        match self {
            ItemKind::Potion => POTION_ID,
            ItemKind::Coin => COIN_ID,
            ItemKind::Water => WATER_ID,
            ItemKind::Apple => APPLE_ID,
            ItemKind::Honey => HONEY_ID,
        }
    }

    /// Returns the item name, used as the inventory key.
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Potion => "Potion",
            ItemKind::Coin => "Coin",
            ItemKind::Water => "Water",
            ItemKind::Apple => "Apple",
            ItemKind::Honey => "Honey",
        }
    }

    /// Returns the fixed stat change applied when the item is used.
    pub fn effect(self) -> StatEffect {
        match self {
            ItemKind::Potion => StatEffect {
                health: POTION_AMOUNT,
                ..StatEffect::default()
            },
            ItemKind::Coin => StatEffect::default(),
            ItemKind::Water => StatEffect {
                thirst: WATER_AMOUNT,
                ..StatEffect::default()
            },
            ItemKind::Apple => StatEffect {
                hunger: APPLE_AMOUNT,
                ..StatEffect::default()
            },
            ItemKind::Honey => StatEffect {
                hunger: HONEY_AMOUNT,
                ..StatEffect::default()
            },
        }
    }
}

/// An item instance placed on (or picked up from) a grid cell.
///
/// The position is where the item was placed in its level; it is kept after
/// pickup because the save format encodes inventory entries with their
/// pickup positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    kind: ItemKind,
    position: Position,
}

impl Item {
    /// Creates a new item of the given kind at the given position.
    pub fn new(kind: ItemKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Returns the item's kind.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Returns the position the item was placed at.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Item {
    /// Renders the constructor-call-like form used by the save format,
    /// e.g. `Potion((1, 2))`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.position)
    }
}
