//! The turn-resolution state machine for MazeRunner.
//!
//! The [`Model`] owns the ordered level sequence, the player, and the move
//! counter, and resolves one turn per [`Model::move_player`] call. Levels
//! are immutable after load except for item pickups and door unlocks.

use crate::config::{
    HEALTH_DECREASE, HUNGER_DECREASE, STAT_DECAY_INTERVAL, THIRST_DECREASE,
};
use crate::maze::{Inventory, Item, Level, Maze, Player, PlayerStats, Position, Tile};
use crate::{WordmazeError, WordmazeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parses the levels out of game-definition text.
///
/// Each level block starts with a `Maze <name> - <rows> <cols>` line
/// followed by its rows of tile/entity identifiers. Content before the first
/// header is ignored, which lets a save file double as a game file.
///
/// Returns an error when a header is malformed, the text holds no levels,
/// or any level lacks a player start.
pub fn load_game(text: &str) -> WordmazeResult<Vec<Level>> {
    let mut levels: Vec<Level> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix("Maze ") {
            let dimensions = parse_level_header(header)?;
            levels.push(Level::new(dimensions));
        } else if !line.is_empty() {
            if let Some(level) = levels.last_mut() {
                level.add_row(line);
            }
        }
    }

    if levels.is_empty() {
        return Err(WordmazeError::MalformedGameFile(
            "no level blocks found".to_string(),
        ));
    }
    for (index, level) in levels.iter().enumerate() {
        if level.player_start().is_none() {
            return Err(WordmazeError::MalformedGameFile(format!(
                "level {} has no player start",
                index
            )));
        }
    }
    Ok(levels)
}

/// Parses `<name> - <rows> <cols>` from a level header line.
fn parse_level_header(header: &str) -> WordmazeResult<(usize, usize)> {
    let malformed =
        || WordmazeError::MalformedGameFile(format!("bad level header: Maze {}", header));
    let (_name, dimensions) = header.split_once(" - ").ok_or_else(malformed)?;
    let mut parts = dimensions.split_whitespace();
    let rows = parts
        .next()
        .and_then(|part| part.parse().ok())
        .ok_or_else(malformed)?;
    let cols = parts
        .next()
        .and_then(|part| part.parse().ok())
        .ok_or_else(malformed)?;
    Ok((rows, cols))
}

/// The overall game state for one MazeRunner game.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::{Model, Position};
///
/// let text = "Maze Hall - 3 4\n####\n#P #\n####\n";
/// let mut model = Model::from_str(text).unwrap();
/// assert_eq!(model.player_position(), Position::new(1, 1));
///
/// model.move_player(Position::new(0, 1));
/// assert_eq!(model.player_position(), Position::new(1, 2));
/// assert_eq!(model.player_stats().health, 99);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    levels: Vec<Level>,
    level_num: usize,
    player: Player,
    move_counter: u32,
    level_up_move: Option<u32>,
    /// The level-definition text the model was loaded from, kept verbatim so
    /// saves can embed it.
    source: String,
}

impl Model {
    /// Creates a model from game-definition text.
    pub fn from_str(text: &str) -> WordmazeResult<Self> {
        let levels = load_game(text)?;
        // load_game guarantees a start for every level
        let start = levels[0]
            .player_start()
            .ok_or_else(|| WordmazeError::InvalidState("missing player start".to_string()))?;
        Ok(Self {
            levels,
            level_num: 0,
            player: Player::new(start),
            move_counter: 1,
            level_up_move: None,
            source: text.to_string(),
        })
    }

    /// Creates a model by reading a game file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> WordmazeResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_str(&text)
    }

    /// Returns whether the game has been won: the level index has advanced
    /// past the last level.
    pub fn has_won(&self) -> bool {
        self.level_num == self.levels.len()
    }

    /// Returns whether the game has been lost: health at the floor, or
    /// hunger or thirst at the ceiling.
    pub fn has_lost(&self) -> bool {
        self.player.health() == crate::config::MIN_STAT
            || self.player.hunger() == crate::config::MAX_HUNGER
            || self.player.thirst() == crate::config::MAX_THIRST
    }

    /// Returns the current level, or `None` once the game is won.
    pub fn level(&self) -> Option<&Level> {
        self.levels.get(self.level_num)
    }

    /// Returns the current level mutably, or `None` once the game is won.
    pub fn level_mut(&mut self) -> Option<&mut Level> {
        self.levels.get_mut(self.level_num)
    }

    /// Returns the total number of levels in the game.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns the current level's maze, or `None` once the game is won.
    pub fn current_maze(&self) -> Option<&Maze> {
        self.level().map(Level::maze)
    }

    /// Returns the current level's uncollected items, or `None` once the
    /// game is won.
    pub fn current_items(&self) -> Option<&BTreeMap<Position, Item>> {
        self.level().map(Level::items)
    }

    /// Returns the player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the player mutably.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Returns the player's current position.
    pub fn player_position(&self) -> Position {
        self.player.position()
    }

    /// Returns the player's (health, hunger, thirst) snapshot.
    pub fn player_stats(&self) -> PlayerStats {
        self.player.stats()
    }

    /// Returns the player's inventory.
    pub fn player_inventory(&self) -> &Inventory {
        self.player.inventory()
    }

    /// Returns the current level index.
    pub fn level_num(&self) -> usize {
        self.level_num
    }

    /// Returns the number of successful moves plus one (the counter starts
    /// at 1 and advances on every non-rejected in-maze move).
    pub fn move_count(&self) -> u32 {
        self.move_counter
    }

    /// Returns the level-definition text this model was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns whether the most recent turn completed a level.
    pub fn did_level_up(&self) -> bool {
        self.level_up_move == Some(self.move_counter)
    }

    /// Moves the player by the given delta, resolving one turn.
    ///
    /// Stepping outside the maze completes the level (no move is consumed);
    /// stepping into a blocking tile is rejected silently; any other step
    /// collects an item at the target cell if one is there, re-evaluates the
    /// door lock, advances the move counter, decays hunger and thirst on
    /// every fifth move, and applies `1 + tile damage` to health.
    pub fn move_player(&mut self, delta: Position) {
        if self.has_won() {
            return;
        }
        let candidate = self.player.position() + delta;
        let tile = match self.levels[self.level_num].maze().get_tile(candidate) {
            Some(tile) => tile,
            None => {
                self.level_up();
                return;
            }
        };
        if tile.is_blocking() {
            log::debug!("move to {} rejected: blocking tile", candidate);
            return;
        }
        self.attempt_collect_item(candidate);
        self.player.set_position(candidate);
        self.move_counter += 1;
        self.update_stats(tile);
    }

    /// Collects the item at the given position into the inventory if one
    /// exists, then re-evaluates the coin-gated door lock.
    pub fn attempt_collect_item(&mut self, position: Position) {
        let level = &mut self.levels[self.level_num];
        if let Some(item) = level.remove_item(position) {
            log::info!("picked up {} at {}", item.kind().name(), position);
            self.player.add_item(item);
        }
        level.attempt_unlock_door();
    }

    /// Advances to the next level (or wins the game) and repositions the
    /// player at the new level's start. The triggering turn is recorded so
    /// the view can react to level changes.
    fn level_up(&mut self) {
        self.level_up_move = Some(self.move_counter);
        self.level_num += 1;
        if self.has_won() {
            log::info!("final level completed");
            return;
        }
        log::info!("advanced to level {}", self.level_num);
        if let Some(start) = self.levels[self.level_num].player_start() {
            self.player.set_position(start);
        }
    }

    /// Applies per-move stat changes for landing on the given tile.
    fn update_stats(&mut self, tile: Tile) {
        // Counter was just incremented, so this fires on the 5th, 10th, ...
        // successful move.
        if (self.move_counter - 1) % STAT_DECAY_INTERVAL == 0 {
            self.player.change_hunger(HUNGER_DECREASE);
            self.player.change_thirst(THIRST_DECREASE);
        }
        self.player.change_health(HEALTH_DECREASE - tile.damage());
    }

    /// Restores the level index. Used when loading a saved game.
    pub fn set_level_num(&mut self, level_num: usize) {
        self.level_num = level_num;
    }

    /// Restores the move counter. Used when loading a saved game.
    pub fn set_move_count(&mut self, move_count: u32) {
        self.move_counter = move_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::ItemKind;

    const RIGHT: Position = Position { row: 0, col: 1 };
    const LEFT: Position = Position { row: 0, col: -1 };
    const DOWN: Position = Position { row: 1, col: 0 };

    const TWO_LEVELS: &str = "\
Maze Cellar - 3 6
######
#P CA
######

Maze Vault - 3 4
####
# P
####
";

    fn model(text: &str) -> Model {
        Model::from_str(text).unwrap()
    }

    #[test]
    fn test_load_game_parses_blocks() {
        let levels = load_game(TWO_LEVELS).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].dimensions(), (3, 6));
        assert_eq!(levels[1].player_start(), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_load_game_rejects_bad_input() {
        assert!(matches!(
            load_game("no levels here"),
            Err(WordmazeError::MalformedGameFile(_))
        ));
        assert!(matches!(
            load_game("Maze Broken - x y\n##\n"),
            Err(WordmazeError::MalformedGameFile(_))
        ));
        assert!(matches!(
            load_game("Maze NoStart - 1 2\n##\n"),
            Err(WordmazeError::MalformedGameFile(_))
        ));
    }

    #[test]
    fn test_blocking_move_is_rejected_silently() {
        let mut model = model(TWO_LEVELS);
        let before = model.player_position();
        model.move_player(DOWN); // wall below the start
        assert_eq!(model.player_position(), before);
        assert_eq!(model.move_count(), 1);
        assert_eq!(model.player_stats().health, 100);
    }

    #[test]
    fn test_successful_move_costs_health() {
        let mut model = model(TWO_LEVELS);
        model.move_player(RIGHT);
        assert_eq!(model.player_position(), Position::new(1, 2));
        assert_eq!(model.move_count(), 2);
        assert_eq!(model.player_stats().health, 99);
        assert_eq!(model.player_stats().hunger, 0);
    }

    #[test]
    fn test_hunger_and_thirst_decay_on_fifth_move() {
        let mut model = model("Maze Corridor - 3 9\n#########\n#P      #\n#########\n");
        for step in 0..4 {
            model.move_player(RIGHT);
            assert_eq!(model.player_stats().hunger, 0, "after move {}", step + 1);
        }
        model.move_player(RIGHT);
        assert_eq!(model.player_stats().hunger, 1);
        assert_eq!(model.player_stats().thirst, 1);
        // Moves 6 through 9 walk back without another decay tick
        for _ in 0..4 {
            model.move_player(LEFT);
        }
        assert_eq!(model.player_stats().hunger, 1);
    }

    #[test]
    fn test_lava_damage_applies_on_entry() {
        let mut model = model("Maze Pit - 3 5\n#####\n#PL #\n#####\n");
        model.move_player(RIGHT);
        assert_eq!(model.player_stats().health, 94); // 1 base + 5 lava
    }

    #[test]
    fn test_item_pickup_moves_into_inventory() {
        let mut model = model(TWO_LEVELS);
        model.move_player(RIGHT);
        model.move_player(RIGHT); // lands on the coin
        assert!(model.player_inventory().check_item("Coin"));
        assert!(!model
            .current_items()
            .unwrap()
            .contains_key(&Position::new(1, 3)));
    }

    #[test]
    fn test_walking_off_edge_advances_level() {
        let mut model = model(TWO_LEVELS);
        for _ in 0..3 {
            model.move_player(RIGHT);
        }
        let moves_before = model.move_count();
        assert_eq!(model.level_num(), 0);
        model.move_player(RIGHT); // off the open east edge
        assert_eq!(model.level_num(), 1);
        assert!(model.did_level_up());
        assert_eq!(model.player_position(), Position::new(1, 2));
        assert_eq!(model.move_count(), moves_before);
    }

    #[test]
    fn test_winning_after_last_level() {
        let mut model = model("Maze Only - 3 3\n###\n#P\n###\n");
        model.move_player(RIGHT); // off the edge of the only level
        assert!(model.has_won());
        assert!(model.level().is_none());
        // Further moves are no-ops once won
        let pos = model.player_position();
        model.move_player(RIGHT);
        assert_eq!(model.player_position(), pos);
    }

    #[test]
    fn test_coin_gated_door() {
        let mut model = model("Maze Gate - 3 6\n######\n#PC D#\n######\n");
        assert_eq!(
            model.current_maze().unwrap().get_tile(Position::new(1, 4)),
            Some(Tile::Door { locked: true })
        );
        model.move_player(RIGHT); // collects the coin, door unlocks
        assert_eq!(
            model.current_maze().unwrap().get_tile(Position::new(1, 4)),
            Some(Tile::Door { locked: false })
        );
        assert_eq!(
            model.player_inventory().get_first_item("Coin").unwrap().kind(),
            ItemKind::Coin
        );
    }

    #[test]
    fn test_has_lost_on_stat_bounds() {
        let mut model = model(TWO_LEVELS);
        assert!(!model.has_lost());
        model.player_mut().change_health(-100);
        assert!(model.has_lost());

        let mut model = model_with_full_hunger();
        assert!(model.has_lost());
        model.player_mut().change_hunger(-10);
        assert!(!model.has_lost());
    }

    fn model_with_full_hunger() -> Model {
        let mut model = model(TWO_LEVELS);
        model.player_mut().change_hunger(10);
        model
    }
}
