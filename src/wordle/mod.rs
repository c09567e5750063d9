//! # Wordle Module
//!
//! The word-guessing game: guess a six-letter word in six tries.
//!
//! [`process_guess`] produces the per-position feedback marks, [`WordList`]
//! holds the vocabulary and answer pools, and [`GuessHistory`] /
//! [`SessionStats`] carry the state the interactive prompt loop displays.

pub mod game;
pub mod words;

pub use game::*;
pub use words::*;
