//! The maze: a 2D grid of tiles parsed from a text layout.

use crate::maze::{Position, Tile};
use serde::{Deserialize, Serialize};

/// A fixed-size tile grid. Rows are appended one at a time while a game file
/// is loaded.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::{Maze, Position, Tile};
///
/// let mut maze = Maze::new((2, 3));
/// maze.add_row("# #");
/// maze.add_row("#L#");
/// assert_eq!(maze.get_tile(Position::new(1, 1)), Some(Tile::Lava));
/// assert_eq!(maze.get_tile(Position::new(2, 0)), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    dimensions: (usize, usize),
    layout: Vec<Vec<Tile>>,
}

impl Maze {
    /// Creates an empty maze with the declared (rows, columns) dimensions.
    pub fn new(dimensions: (usize, usize)) -> Self {
        Self {
            dimensions,
            layout: Vec::with_capacity(dimensions.0),
        }
    }

    /// Returns the declared (rows, columns) dimensions.
    pub fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Returns the number of rows added so far.
    pub fn rows(&self) -> usize {
        self.layout.len()
    }

    /// Appends one row of tiles, mapping each character through
    /// [`Tile::from_id`]. Entity characters become empty floor.
    pub fn add_row(&mut self, row: &str) {
        self.layout.push(row.chars().map(Tile::from_id).collect());
    }

    /// Returns the tile at the given position, or `None` when the position
    /// lies outside the stored grid.
    ///
    /// The absent case is how the model detects the player walking off the
    /// edge of a level.
    pub fn get_tile(&self, position: Position) -> Option<Tile> {
        if position.row < 0 || position.col < 0 {
            return None;
        }
        self.layout
            .get(position.row as usize)
            .and_then(|row| row.get(position.col as usize))
            .copied()
    }

    /// Returns the full tile layout.
    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.layout
    }

    /// Unlocks the first locked door in row-major order; a no-op when the
    /// maze has none. Mazes have at most one door in practice.
    pub fn unlock_door(&mut self) {
        for row in &mut self.layout {
            for tile in row {
                if matches!(tile, Tile::Door { locked: true }) {
                    tile.unlock();
                    return;
                }
            }
        }
    }
}

impl std::fmt::Display for Maze {
    /// One line of tile identifiers per row.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .layout
            .iter()
            .map(|row| row.iter().map(|tile| tile.id()).collect())
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
