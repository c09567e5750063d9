//! Save file format for MazeRunner.
//!
//! A save is the original level-definition text with a single header line
//! prepended:
//!
//! ```text
//! <inventory:Potion((1, 2)),,;entities:{(1, 3): Coin((1, 3))};player_pos:(1, 1);stats:(97, 0, 0);level_num:0;num_moves:4;time:(0, 42);>
//! ```
//!
//! Keys are `key:value` pairs separated by `;` inside angle brackets:
//! the inventory as `,,`-separated constructor-call-like entries, the
//! level's remaining entities as a braced position-to-item map, and the
//! player position, stats, level index, move count, and elapsed
//! (minutes, seconds). Because the level text follows unchanged, a save
//! file is itself loadable as a game file; loading re-parses the levels and
//! then replays the recorded state on top. A malformed save is rejected as
//! a whole, leaving the caller's game state untouched.

use crate::maze::{Inventory, Item, ItemKind, Model, Position};
use crate::{WordmazeError, WordmazeResult};
use std::fs;
use std::path::Path;

/// Elapsed play time as (minutes, seconds).
pub type SavedTime = (u32, u32);

/// Writes the model's state and level text to a save file.
pub fn write_save(model: &Model, time: SavedTime, path: impl AsRef<Path>) -> WordmazeResult<()> {
    let mut contents = render_header(model, time);
    contents.push_str("\n\n");
    // Strip any header a previously loaded save left in the level text
    for line in model.source().lines().filter(|line| !line.starts_with('<')) {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path.as_ref(), contents)?;
    log::info!("game saved to {}", path.as_ref().display());
    Ok(())
}

/// Reads a save file, returning the restored model and the saved play time.
pub fn read_save(path: impl AsRef<Path>) -> WordmazeResult<(Model, SavedTime)> {
    let text = fs::read_to_string(path)?;
    read_save_text(&text)
}

fn render_header(model: &Model, time: SavedTime) -> String {
    let inventory: String = model
        .player_inventory()
        .iter()
        .map(|item| format!("{},,", item))
        .collect();

    let entities = model
        .current_items()
        .map(|items| {
            let entries: Vec<String> = items
                .iter()
                .map(|(position, item)| format!("{}: {}", position, item))
                .collect();
            format!("{{{}}}", entries.join(", "))
        })
        .unwrap_or_else(|| "{}".to_string());

    let stats = model.player_stats();
    format!(
        "<inventory:{};entities:{};player_pos:{};stats:({}, {}, {});level_num:{};num_moves:{};time:({}, {});>",
        inventory,
        entities,
        model.player_position(),
        stats.health,
        stats.hunger,
        stats.thirst,
        model.level_num(),
        model.move_count(),
        time.0,
        time.1,
    )
}

fn read_save_text(text: &str) -> WordmazeResult<(Model, SavedTime)> {
    if !text.starts_with('<') {
        return Err(WordmazeError::MalformedSave(
            "missing header line".to_string(),
        ));
    }
    let end = text
        .find('>')
        .ok_or_else(|| WordmazeError::MalformedSave("unterminated header".to_string()))?;

    // Header fields; the game-file parser below ignores the header line.
    let mut model = Model::from_str(text).map_err(|err| {
        WordmazeError::MalformedSave(format!("embedded level text: {}", err))
    })?;

    let field = |key: &str| -> WordmazeResult<&str> {
        text[1..end]
            .split(';')
            .filter_map(|chunk| chunk.split_once(':'))
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
            .ok_or_else(|| WordmazeError::MalformedSave(format!("missing field: {}", key)))
    };

    let level_num: usize = parse_int(field("level_num")?)?;
    let num_moves: u32 = parse_int(field("num_moves")?)?;
    let player_pos = parse_position(field("player_pos")?)?;
    let saved_entities = parse_entities(field("entities")?)?;
    let (health, hunger, thirst) = parse_stats(field("stats")?)?;
    let inventory = parse_inventory(field("inventory")?)?;
    let time = parse_time(field("time")?)?;

    if level_num >= model.level_count() {
        return Err(WordmazeError::MalformedSave(format!(
            "level index {} out of range",
            level_num
        )));
    }

    model.set_level_num(level_num);
    model.set_move_count(num_moves);
    model.player_mut().set_position(player_pos);

    // Drop level items the save no longer has; everything else was already
    // re-created by the level parser.
    let current: Vec<Position> = model
        .current_items()
        .map(|items| items.keys().copied().collect())
        .unwrap_or_default();
    for position in current {
        if !saved_entities.contains(&position) {
            if let Some(level) = model.level_mut() {
                level.remove_item(position);
            }
        }
    }
    // The door lock is derived from the remaining coins, not stored
    if let Some(level) = model.level_mut() {
        level.attempt_unlock_door();
    }

    // Stats are restored as deltas against the fresh player; change_* clamps
    // keep hostile values inside the valid ranges.
    let fresh = model.player_stats();
    model.player_mut().change_health(health - fresh.health);
    model.player_mut().change_hunger(hunger - fresh.hunger);
    model.player_mut().change_thirst(thirst - fresh.thirst);

    *model.player_mut().inventory_mut() = inventory;

    log::info!("loaded save at level {} after {} moves", level_num, num_moves);
    Ok((model, time))
}

fn parse_int<T: std::str::FromStr>(value: &str) -> WordmazeResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| WordmazeError::MalformedSave(format!("bad integer: {}", value)))
}

/// Parses `(a, b)` into a position.
fn parse_position(value: &str) -> WordmazeResult<Position> {
    let (row, col) = parse_pair(value)?;
    Ok(Position::new(row, col))
}

fn parse_pair(value: &str) -> WordmazeResult<(i32, i32)> {
    let inner = strip_delimiters(value, '(', ')')?;
    let (first, second) = inner
        .split_once(',')
        .ok_or_else(|| WordmazeError::MalformedSave(format!("bad pair: {}", value)))?;
    Ok((parse_int(first)?, parse_int(second)?))
}

fn parse_time(value: &str) -> WordmazeResult<SavedTime> {
    let inner = strip_delimiters(value, '(', ')')?;
    let (minutes, seconds) = inner
        .split_once(',')
        .ok_or_else(|| WordmazeError::MalformedSave(format!("bad time: {}", value)))?;
    Ok((parse_int(minutes)?, parse_int(seconds)?))
}

/// Parses `(h, hu, th)` into the three stat values.
fn parse_stats(value: &str) -> WordmazeResult<(i32, i32, i32)> {
    let inner = strip_delimiters(value, '(', ')')?;
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 3 {
        return Err(WordmazeError::MalformedSave(format!("bad stats: {}", value)));
    }
    Ok((
        parse_int(parts[0])?,
        parse_int(parts[1])?,
        parse_int(parts[2])?,
    ))
}

/// Parses the `,,`-separated inventory entries.
fn parse_inventory(value: &str) -> WordmazeResult<Inventory> {
    let mut inventory = Inventory::new();
    for entry in value.split(",,").filter(|entry| !entry.trim().is_empty()) {
        inventory.add_item(parse_item(entry.trim())?);
    }
    Ok(inventory)
}

/// Parses one `Name((r, c))` entry.
fn parse_item(value: &str) -> WordmazeResult<Item> {
    let open = value
        .find('(')
        .ok_or_else(|| WordmazeError::MalformedSave(format!("bad item: {}", value)))?;
    let name = &value[..open];
    let kind = ItemKind::from_name(name)
        .ok_or_else(|| WordmazeError::MalformedSave(format!("unknown item: {}", name)))?;
    if !value.ends_with(')') || value.len() < open + 2 {
        return Err(WordmazeError::MalformedSave(format!("bad item: {}", value)));
    }
    let position = parse_position(&value[open + 1..value.len() - 1])?;
    Ok(Item::new(kind, position))
}

/// Parses the braced `{(r, c): Name((r, c)), ...}` entity map into the set
/// of positions still holding an item.
///
/// Entries are split at commas outside parentheses, since positions and
/// item encodings both contain commas of their own.
fn parse_entities(value: &str) -> WordmazeResult<Vec<Position>> {
    let inner = strip_delimiters(value, '{', '}')?;
    let mut positions = Vec::new();
    for entry in split_top_level(inner) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (position, _item) = entry
            .split_once(':')
            .ok_or_else(|| WordmazeError::MalformedSave(format!("bad entity: {}", entry)))?;
        positions.push(parse_position(position.trim())?);
    }
    Ok(positions)
}

fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, character) in text.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn strip_delimiters<'a>(value: &'a str, open: char, close: char) -> WordmazeResult<&'a str> {
    value
        .trim()
        .strip_prefix(open)
        .and_then(|inner| inner.strip_suffix(close))
        .ok_or_else(|| {
            WordmazeError::MalformedSave(format!("expected {}...{}: {}", open, close, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const GAME: &str = "\
Maze Cellar - 3 7
#######
#PC MA#
#######

Maze Vault - 3 4
####
# P
####
";

    fn played_model() -> Model {
        let mut model = Model::from_str(GAME).unwrap();
        // Collect the coin and the potion, leave the apple on the board
        model.move_player(Position::new(0, 1));
        model.move_player(Position::new(0, 1));
        model.move_player(Position::new(0, 1));
        model
    }

    #[test]
    fn test_header_encoding() {
        let model = played_model();
        let header = render_header(&model, (1, 23));
        assert!(header.starts_with('<') && header.ends_with(">"));
        assert!(header.contains("inventory:Coin((1, 2)),,Potion((1, 4)),,;"));
        assert!(header.contains("entities:{(1, 5): Apple((1, 5))};"));
        assert!(header.contains("player_pos:(1, 4);"));
        assert!(header.contains("stats:(97, 0, 0);"));
        assert!(header.contains("level_num:0;"));
        assert!(header.contains("num_moves:4;"));
        assert!(header.contains("time:(1, 23);"));
    }

    #[test]
    fn test_save_and_load_restores_state() {
        let model = played_model();
        let file = NamedTempFile::new().unwrap();
        write_save(&model, (0, 42), file.path()).unwrap();

        let (loaded, time) = read_save(file.path()).unwrap();
        assert_eq!(time, (0, 42));
        assert_eq!(loaded.level_num(), 0);
        assert_eq!(loaded.move_count(), 4);
        assert_eq!(loaded.player_position(), Position::new(1, 4));
        assert_eq!(loaded.player_stats(), model.player_stats());
        assert_eq!(loaded.player_inventory().count("Coin"), 1);
        assert_eq!(loaded.player_inventory().count("Potion"), 1);
        // The collected items are gone; the apple is still on the board
        let items = loaded.current_items().unwrap();
        assert_eq!(items.len(), 1);
        assert!(items.contains_key(&Position::new(1, 5)));
    }

    #[test]
    fn test_saving_a_loaded_game_does_not_stack_headers() {
        let model = played_model();
        let first = NamedTempFile::new().unwrap();
        write_save(&model, (0, 10), first.path()).unwrap();

        let (loaded, _) = read_save(first.path()).unwrap();
        let second = NamedTempFile::new().unwrap();
        write_save(&loaded, (0, 20), second.path()).unwrap();

        let text = std::fs::read_to_string(second.path()).unwrap();
        assert_eq!(text.matches('<').count(), 1);
        assert!(read_save(second.path()).is_ok());
    }

    #[test]
    fn test_rejects_malformed_saves() {
        assert!(matches!(
            read_save_text(GAME),
            Err(WordmazeError::MalformedSave(_))
        ));
        assert!(matches!(
            read_save_text("<inventory:;>\n\nMaze A - 1 2\n#P\n"),
            Err(WordmazeError::MalformedSave(_))
        ));
        let bad_level = "<inventory:;entities:{};player_pos:(0, 1);stats:(50, 0, 0);level_num:9;num_moves:2;time:(0, 1);>\n\nMaze A - 1 2\n#P\n";
        assert!(matches!(
            read_save_text(bad_level),
            Err(WordmazeError::MalformedSave(_))
        ));
    }

    #[test]
    fn test_loaded_stats_are_clamped() {
        let hostile = "<inventory:;entities:{};player_pos:(0, 1);stats:(900, -4, 3);level_num:0;num_moves:2;time:(0, 1);>\n\nMaze A - 1 2\n#P\n";
        let (model, _) = read_save_text(hostile).unwrap();
        assert_eq!(model.player_stats().health, 100);
        assert_eq!(model.player_stats().hunger, 0);
        assert_eq!(model.player_stats().thirst, 3);
    }
}
