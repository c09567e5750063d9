//! Guess marking and per-session Wordle state.

use crate::config::{MAX_GUESSES, WORD_LENGTH};
use crate::wordle::WordList;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Feedback for one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    /// Right letter in the right position
    Correct,
    /// Letter occurs in the answer, but elsewhere
    Misplaced,
    /// Letter does not occur (or its occurrences are used up)
    Incorrect,
}

impl Mark {
    /// The colored square shown for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Correct => '🟩',
            Mark::Misplaced => '🟨',
            Mark::Incorrect => '⬛',
        }
    }

    /// Ranks marks for the keyboard display; lower is better.
    fn rank(self) -> u8 {
        match self {
            Mark::Correct => 0,
            Mark::Misplaced => 1,
            Mark::Incorrect => 2,
        }
    }
}

/// Returns whether the guess matches the answer, ignoring case.
///
/// # Examples
///
/// ```
/// use wordmaze::wordle::has_won;
///
/// assert!(has_won("Cranes", "cRANES"));
/// assert!(!has_won("cranes", "planes"));
/// ```
pub fn has_won(guess: &str, answer: &str) -> bool {
    guess.eq_ignore_ascii_case(answer)
}

/// Returns whether the player is out of guesses.
pub fn has_lost(guess_number: usize) -> bool {
    guess_number >= MAX_GUESSES
}

/// Marks a guess against the answer, one mark per guess letter.
///
/// Correct-position matches are assigned first; the remaining letters then
/// claim misplaced marks left to right, each consuming one unmatched
/// occurrence of that letter in the answer. A letter with no unconsumed
/// occurrences left is incorrect, so a letter appearing more often in the
/// guess than in the answer never earns extra marks.
///
/// # Examples
///
/// ```
/// use wordmaze::wordle::{process_guess, Mark};
///
/// let marks = process_guess("strand", "strain");
/// assert_eq!(marks[0], Mark::Correct);
/// assert_eq!(marks[4], Mark::Misplaced); // the 'n' occurs later in the answer
/// assert_eq!(marks[5], Mark::Incorrect);
/// ```
pub fn process_guess(guess: &str, answer: &str) -> Vec<Mark> {
    let guess: Vec<char> = guess.to_lowercase().chars().collect();
    let answer: Vec<char> = answer.to_lowercase().chars().collect();
    let mut marks = vec![Mark::Incorrect; guess.len()];

    // Pass 1: exact matches; everything else in the answer stays claimable
    let mut unmatched: HashMap<char, usize> = HashMap::new();
    for (index, &letter) in answer.iter().enumerate() {
        if guess.get(index) == Some(&letter) {
            marks[index] = Mark::Correct;
        } else {
            *unmatched.entry(letter).or_insert(0) += 1;
        }
    }

    // Pass 2: misplaced marks consume the remaining multiplicity
    for (index, &letter) in guess.iter().enumerate() {
        if marks[index] == Mark::Correct {
            continue;
        }
        if let Some(count) = unmatched.get_mut(&letter) {
            if *count > 0 {
                marks[index] = Mark::Misplaced;
                *count -= 1;
            }
        }
    }

    marks
}

/// The guesses made so far in one round, oldest first.
#[derive(Debug, Clone, Default)]
pub struct GuessHistory {
    entries: Vec<(String, Vec<Mark>)>,
}

impl GuessHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a guess and its marks against the answer.
    pub fn push(&mut self, guess: &str, answer: &str) {
        self.entries
            .push((guess.to_lowercase(), process_guess(guess, answer)));
    }

    /// Returns the recorded (guess, marks) pairs.
    pub fn entries(&self) -> &[(String, Vec<Mark>)] {
        &self.entries
    }

    /// Renders the numbered guess history with its mark rows.
    pub fn render(&self) -> String {
        const RULE: &str = "---------------\n";
        let mut output = String::new();
        for (index, (guess, marks)) in self.entries.iter().enumerate() {
            let letters: Vec<String> = guess.chars().map(|letter| letter.to_string()).collect();
            let squares: String = marks.iter().map(|mark| mark.symbol()).collect();
            output.push_str(RULE);
            output.push_str(&format!(
                "Guess {}:  {}\n{}{}\n",
                index + 1,
                letters.join(" "),
                " ".repeat(9),
                squares
            ));
        }
        output.push_str(RULE);
        output
    }

    /// Returns the best mark seen so far for each letter `a..=z`, or `None`
    /// for letters not yet guessed. Correct beats misplaced beats incorrect.
    pub fn keyboard(&self) -> Vec<(char, Option<Mark>)> {
        let mut status: Vec<(char, Option<Mark>)> =
            ('a'..='z').map(|letter| (letter, None)).collect();
        for (guess, marks) in &self.entries {
            for (letter, &mark) in guess.chars().zip(marks.iter()) {
                if !letter.is_ascii_lowercase() {
                    continue;
                }
                let slot = &mut status[(letter as u8 - b'a') as usize].1;
                let better = match slot {
                    Some(existing) => mark.rank() < existing.rank(),
                    None => true,
                };
                if better {
                    *slot = Some(mark);
                }
            }
        }
        status
    }

    /// Renders the keyboard status display, two letters per line.
    pub fn render_keyboard(&self) -> String {
        let mut output = format!("\nKeyboard information\n{}\n", "-".repeat(12));
        for (index, (letter, mark)) in self.keyboard().into_iter().enumerate() {
            let square = mark.map_or(' ', Mark::symbol);
            output.push_str(&format!("{}: {}", letter, square));
            output.push(if index % 2 == 1 { '\n' } else { '\t' });
        }
        output
    }
}

/// Win/loss tallies across rounds: wins bucketed by how many guesses they
/// took, plus a loss count.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    wins: [u32; MAX_GUESSES],
    losses: u32,
}

impl SessionStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the end of a round: a win in `guess_number` guesses, or a
    /// loss.
    pub fn record(&mut self, guess_number: usize, won: bool) {
        if won {
            self.wins[guess_number - 1] += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Renders the statistics block shown between rounds.
    pub fn render(&self) -> String {
        let mut output = String::from("\nGames won in:\n");
        for (index, count) in self.wins.iter().enumerate() {
            output.push_str(&format!("{} moves: {}\n", index + 1, count));
        }
        output.push_str(&format!("Games lost: {}", self.losses));
        output
    }
}

/// Why a guess was rejected by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Not exactly six letters
    WrongLength,
    /// Six letters, but not in the vocabulary
    UnknownWord,
}

/// Validates a prospective guess against the vocabulary.
pub fn validate_guess(guess: &str, vocab: &WordList) -> Result<(), GuessError> {
    if guess.chars().count() != WORD_LENGTH {
        Err(GuessError::WrongLength)
    } else if !vocab.contains(guess) {
        Err(GuessError::UnknownWord)
    } else {
        Ok(())
    }
}
