//! The text view for MazeRunner.

use crate::maze::{Inventory, Item, Maze, PlayerStats, Position, PLAYER_ID};
use std::collections::BTreeMap;

/// Message printed when the player finishes every level.
pub const WIN_MESSAGE: &str =
    "Congratulations! You have finished all levels and won the game!";
/// Message printed when the player's stats end the game.
pub const LOSS_MESSAGE: &str = "You lose :(";
/// Message printed for an `i <name>` command naming no known item.
pub const WRONG_ITEM_MESSAGE: &str = "\nNo item with that name!\n";
/// Message printed when the named item is not in the inventory.
pub const ITEM_UNAVAILABLE_MESSAGE: &str = "\nYou don't have any of that item!\n";
/// The move prompt.
pub const MOVE_MESSAGE: &str = "\nEnter a move: ";
/// The game-file prompt.
pub const INPUT_MESSAGE: &str = "Enter game file: ";

/// A view of the MazeRunner game state. The controller redraws through this
/// after every turn.
pub trait UserInterface {
    /// Draws the current game state.
    fn draw(
        &self,
        maze: &Maze,
        items: &BTreeMap<Position, Item>,
        player_position: Position,
        inventory: &Inventory,
        player_stats: PlayerStats,
    );
}

/// A view that renders the game as plain text on stdout.
pub struct TextInterface;

impl TextInterface {
    /// Renders the maze with items and the player overlaid on their cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use wordmaze::maze::{Maze, Position, TextInterface};
    ///
    /// let mut maze = Maze::new((1, 3));
    /// maze.add_row("# #");
    /// let rendered = TextInterface::render_level(&maze, &BTreeMap::new(), Position::new(0, 1));
    /// assert_eq!(rendered, "#P#");
    /// ```
    pub fn render_level(
        maze: &Maze,
        items: &BTreeMap<Position, Item>,
        player_position: Position,
    ) -> String {
        let mut lines = Vec::with_capacity(maze.rows());
        for (row, tiles) in maze.tiles().iter().enumerate() {
            let mut line = String::with_capacity(tiles.len());
            for (col, tile) in tiles.iter().enumerate() {
                let position = Position::new(row as i32, col as i32);
                if position == player_position {
                    line.push(PLAYER_ID);
                } else if let Some(item) = items.get(&position) {
                    line.push(item.kind().id());
                } else {
                    line.push(tile.id());
                }
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Renders the inventory block shown under the maze.
    pub fn render_inventory(inventory: &Inventory) -> String {
        let body = if inventory.is_empty() {
            "Empty".to_string()
        } else {
            inventory.to_string()
        };
        format!("---------------\nInventory\n{}\n---------------", body)
    }

    /// Renders the player stat lines.
    pub fn render_stats(player_stats: PlayerStats) -> String {
        format!(
            "HP: {}\nhunger: {}\nthirst: {}",
            player_stats.health, player_stats.hunger, player_stats.thirst
        )
    }
}

impl UserInterface for TextInterface {
    fn draw(
        &self,
        maze: &Maze,
        items: &BTreeMap<Position, Item>,
        player_position: Position,
        inventory: &Inventory,
        player_stats: PlayerStats,
    ) {
        println!("{}", Self::render_level(maze, items, player_position));
        println!("{}", Self::render_inventory(inventory));
        println!("{}", Self::render_stats(player_stats));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{ItemKind, Level};

    #[test]
    fn test_render_level_overlays_player_and_items() {
        let mut level = Level::new((3, 5));
        level.add_row("#####");
        level.add_row("#P C#");
        level.add_row("#####");

        let rendered = TextInterface::render_level(
            level.maze(),
            level.items(),
            level.player_start().unwrap(),
        );
        assert_eq!(rendered, "#####\n#P C#\n#####");
    }

    #[test]
    fn test_player_draws_over_item_cell() {
        let mut level = Level::new((1, 3));
        level.add_row("PW#");
        let rendered =
            TextInterface::render_level(level.maze(), level.items(), Position::new(0, 1));
        assert_eq!(rendered, " P#");
    }

    #[test]
    fn test_render_inventory_empty_and_filled() {
        let mut inventory = Inventory::new();
        assert_eq!(
            TextInterface::render_inventory(&inventory),
            "---------------\nInventory\nEmpty\n---------------"
        );
        inventory.add_item(Item::new(ItemKind::Apple, Position::new(0, 0)));
        assert_eq!(
            TextInterface::render_inventory(&inventory),
            "---------------\nInventory\nApple: 1\n---------------"
        );
    }

    #[test]
    fn test_render_stats() {
        let stats = PlayerStats {
            health: 97,
            hunger: 2,
            thirst: 3,
        };
        assert_eq!(
            TextInterface::render_stats(stats),
            "HP: 97\nhunger: 2\nthirst: 3"
        );
    }
}
