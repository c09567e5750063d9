//! Tile variants making up a maze floor.
//!
//! A tile is passive terrain: it either blocks movement or it does not, and
//! it may damage the player who steps on it. The only mutable tile is the
//! [`Tile::Door`], which unlocks exactly once when every coin in the level
//! has been collected.

use crate::config::LAVA_DAMAGE;
use serde::{Deserialize, Serialize};

/// Identifier character for wall tiles.
pub const WALL_ID: char = '#';
/// Identifier character for empty tiles (and unlocked doors).
pub const EMPTY_ID: char = ' ';
/// Identifier character for lava tiles.
pub const LAVA_ID: char = 'L';
/// Identifier character for locked door tiles.
pub const DOOR_ID: char = 'D';

/// Terrain type for one maze cell.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::Tile;
///
/// let mut door = Tile::from_id('D');
/// assert!(door.is_blocking());
/// door.unlock();
/// assert!(!door.is_blocking());
/// assert_eq!(door.id(), ' ');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Walkable floor with no effect
    Empty,
    /// Impassable wall
    Wall,
    /// Walkable floor that damages the player
    Lava,
    /// Blocking while locked; becomes an empty tile once unlocked
    Door { locked: bool },
}

impl Tile {
    /// Maps a game-file character to a tile.
    ///
    /// Unrecognized characters, including entity identifiers, map to
    /// [`Tile::Empty`]; entities live on top of empty floor.
    pub fn from_id(id: char) -> Self {
        match id {
            WALL_ID => Tile::Wall,
            LAVA_ID => Tile::Lava,
            DOOR_ID => Tile::Door { locked: true },
            _ => Tile::Empty,
        }
    }

    /// Returns whether the player is prevented from stepping on this tile.
    pub fn is_blocking(self) -> bool {
        matches!(self, Tile::Wall | Tile::Door { locked: true })
    }

    /// Returns the damage done to a player who steps on this tile.
    pub fn damage(self) -> i32 {
        match self {
            Tile::Lava => LAVA_DAMAGE,
            _ => 0,
        }
    }

    /// Returns the identifier character for this tile.
    ///
    /// An unlocked door reports the empty identifier; once opened it is
    /// indistinguishable from floor.
    pub fn id(self) -> char {
        match self {
            Tile::Empty => EMPTY_ID,
            Tile::Wall => WALL_ID,
            Tile::Lava => LAVA_ID,
            Tile::Door { locked: true } => DOOR_ID,
            Tile::Door { locked: false } => EMPTY_ID,
        }
    }

    /// Unlocks a locked door; a no-op on every other tile.
    pub fn unlock(&mut self) {
        if let Tile::Door { locked } = self {
            *locked = false;
        }
    }
}
