//! # Wordmaze
//!
//! Two small, fully synchronous terminal games sharing one crate:
//!
//! - **Wordle**: guess a six-letter word in six tries, with per-position
//!   feedback and a keyboard status display.
//! - **MazeRunner**: a turn-based survival maze. The player walks a grid of
//!   tiles, collects items, manages health/hunger/thirst, and finishes a
//!   level by walking off the edge of its maze.
//!
//! ## Architecture Overview
//!
//! The MazeRunner side follows a model/view/controller split:
//!
//! - **Model** ([`maze::Model`]): the turn-resolution state machine owning
//!   the level sequence, the player, and the move counter.
//! - **View** ([`maze::TextInterface`]): renders the model to the terminal.
//! - **Controller** (`main.rs`): reads commands, calls model mutators, and
//!   checks win/loss after every turn.
//!
//! The Wordle side is a set of pure guess-marking functions plus the small
//! amount of session state (history, keyboard, statistics) the prompt loop
//! needs.

pub mod maze;
pub mod wordle;

/// Core error type for the wordmaze games.
#[derive(thiserror::Error, Debug)]
pub enum WordmazeError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A game definition file could not be parsed
    #[error("Malformed game file: {0}")]
    MalformedGameFile(String),

    /// A save file could not be parsed
    #[error("Malformed save file: {0}")]
    MalformedSave(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the wordmaze codebase.
pub type WordmazeResult<T> = Result<T, WordmazeError>;

/// Version information for the games.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Length of every Wordle word
    pub const WORD_LENGTH: usize = 6;

    /// Number of Wordle guesses before the game is lost
    pub const MAX_GUESSES: usize = 6;

    /// Player health ceiling (floor is 0)
    pub const MAX_HEALTH: i32 = 100;

    /// Player hunger ceiling; reaching it loses the game
    pub const MAX_HUNGER: i32 = 10;

    /// Player thirst ceiling; reaching it loses the game
    pub const MAX_THIRST: i32 = 10;

    /// Floor for all player stats
    pub const MIN_STAT: i32 = 0;

    /// Extra damage taken when stepping on lava
    pub const LAVA_DAMAGE: i32 = 5;

    /// Health restored by a potion
    pub const POTION_AMOUNT: i32 = 20;

    /// Hunger change from eating an apple
    pub const APPLE_AMOUNT: i32 = -1;

    /// Hunger change from eating honey
    pub const HONEY_AMOUNT: i32 = -5;

    /// Thirst change from drinking water
    pub const WATER_AMOUNT: i32 = -5;

    /// Health lost on every successful move, before tile damage
    pub const HEALTH_DECREASE: i32 = -1;

    /// Hunger gained on every fifth successful move
    pub const HUNGER_DECREASE: i32 = 1;

    /// Thirst gained on every fifth successful move
    pub const THIRST_DECREASE: i32 = 1;

    /// Hunger/thirst decay cadence, in successful moves
    pub const STAT_DECAY_INTERVAL: u32 = 5;
}
