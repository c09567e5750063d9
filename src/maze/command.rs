//! Text-mode command parsing for MazeRunner.

use crate::maze::Position;
use std::path::PathBuf;

/// Prefix for the use-item command, e.g. `i potion`.
pub const ITEM_START: &str = "i ";
/// Prefix for the save command, e.g. `save game.txt`.
pub const SAVE_START: &str = "save ";

/// A player command read from the move prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the player by a (row, column) delta
    Move(Position),
    /// Use an inventory item by name
    UseItem(String),
    /// Save the game to the given path
    Save(PathBuf),
    /// Quit the game
    Quit,
}

/// Parses one line of move-prompt input.
///
/// `w`/`a`/`s`/`d` map to movement deltas, `i <item name>` uses an item
/// (the name is capitalized for the player, so `i potion` works), `save
/// <path>` writes a save file, and `q` quits. Anything else is invalid and
/// the prompt loops.
///
/// # Examples
///
/// ```
/// use wordmaze::maze::{parse_command, Command, Position};
///
/// assert_eq!(parse_command("w"), Some(Command::Move(Position::new(-1, 0))));
/// assert_eq!(parse_command("i potion"), Some(Command::UseItem("Potion".to_string())));
/// assert_eq!(parse_command("x"), None);
/// ```
pub fn parse_command(input: &str) -> Option<Command> {
    match input {
        "w" => return Some(Command::Move(Position::new(-1, 0))),
        "s" => return Some(Command::Move(Position::new(1, 0))),
        "a" => return Some(Command::Move(Position::new(0, -1))),
        "d" => return Some(Command::Move(Position::new(0, 1))),
        "q" => return Some(Command::Quit),
        _ => {}
    }
    if let Some(name) = input.strip_prefix(ITEM_START) {
        return Some(Command::UseItem(capitalize(name)));
    }
    if let Some(path) = input.strip_prefix(SAVE_START) {
        if !path.trim().is_empty() {
            return Some(Command::Save(PathBuf::from(path.trim())));
        }
    }
    None
}

/// Uppercases the first character and lowercases the rest, so item names
/// typed in any case match their inventory keys.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
