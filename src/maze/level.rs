//! A level: one maze plus its item placements and player start.

use crate::maze::{Item, ItemKind, Maze, Position, PLAYER_ID};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One playable level of the game.
///
/// Owns the maze, the uncollected items keyed by position (at most one item
/// per position), and the player's start position for this level.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::{ItemKind, Level, Position};
///
/// let mut level = Level::new((2, 4));
/// level.add_row("#P C");
/// level.add_row("####");
///
/// assert_eq!(level.player_start(), Some(Position::new(0, 1)));
/// let item = level.items().get(&Position::new(0, 3)).unwrap();
/// assert_eq!(item.kind(), ItemKind::Coin);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    maze: Maze,
    items: BTreeMap<Position, Item>,
    player_start: Option<Position>,
}

impl Level {
    /// Creates a level with an empty maze of the declared dimensions and no
    /// items or player start.
    pub fn new(dimensions: (usize, usize)) -> Self {
        Self {
            maze: Maze::new(dimensions),
            items: BTreeMap::new(),
            player_start: None,
        }
    }

    /// Adds one row of tiles and entities.
    ///
    /// Tile parsing is delegated to the maze; item identifiers additionally
    /// record an item at (row, column), and the player identifier records
    /// the start position. The row index is the number of rows the maze held
    /// before this call.
    pub fn add_row(&mut self, row: &str) {
        self.maze.add_row(row);
        let row_num = self.maze.rows() as i32 - 1;
        for (col, id) in row.chars().enumerate() {
            let position = Position::new(row_num, col as i32);
            if id == PLAYER_ID {
                self.player_start = Some(position);
            } else if let Some(kind) = ItemKind::from_id(id) {
                self.items.insert(position, Item::new(kind, position));
            }
        }
    }

    /// Returns the level's maze.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the level's maze mutably.
    pub fn maze_mut(&mut self) -> &mut Maze {
        &mut self.maze
    }

    /// Returns the declared (rows, columns) dimensions of the maze.
    pub fn dimensions(&self) -> (usize, usize) {
        self.maze.dimensions()
    }

    /// Returns the uncollected items keyed by position.
    pub fn items(&self) -> &BTreeMap<Position, Item> {
        &self.items
    }

    /// Removes and returns the item at the given position, if one exists.
    pub fn remove_item(&mut self, position: Position) -> Option<Item> {
        self.items.remove(&position)
    }

    /// Unlocks the maze door iff no remaining item in the level is a coin.
    ///
    /// Called after every successful move so the door opens the moment the
    /// last coin leaves the board.
    pub fn attempt_unlock_door(&mut self) {
        let coins_remain = self
            .items
            .values()
            .any(|item| item.kind() == ItemKind::Coin);
        if !coins_remain {
            self.maze.unlock_door();
        }
    }

    /// Returns the player's start position for this level, if the layout
    /// declared one.
    pub fn player_start(&self) -> Option<Position> {
        self.player_start
    }
}
