//! # MazeRunner Module
//!
//! The turn-based survival maze: tile grids, collectible items, the player
//! with bounded stats, and the [`Model`] state machine that resolves turns.
//!
//! The module mirrors the game's data model bottom-up:
//!
//! - [`Tile`] and [`ItemKind`]/[`Item`]: passive cell and object variants
//! - [`Maze`]: a 2D tile grid parsed from a text layout
//! - [`Level`]: a maze plus item placements and the player start
//! - [`Inventory`] and [`Player`]: collected items and bounded stats
//! - [`Model`]: level progression, movement, stat decay, win/loss
//! - [`TextInterface`] and [`save`]: the text view and the save file format

pub mod command;
pub mod grid;
pub mod interface;
pub mod inventory;
pub mod item;
pub mod level;
pub mod model;
pub mod player;
pub mod save;
pub mod tile;

pub use command::*;
pub use grid::*;
pub use interface::*;
pub use inventory::*;
pub use item::*;
pub use level::*;
pub use model::*;
pub use player::*;
pub use tile::*;

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate in a maze.
///
/// Coordinates are signed so that a movement delta can carry a position off
/// either edge of the grid; the maze itself decides what is in bounds.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos + Position::new(-1, 0), Position::new(1, 3));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a new position with the given row and column.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.row - other.row, self.col - other.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Identifier character for the player, both in game files and when the text
/// view draws the player over a tile.
pub const PLAYER_ID: char = 'P';
