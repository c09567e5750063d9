//! Word list loading and answer selection.

use crate::WordmazeResult;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;

/// A pool of words loaded from a newline-delimited file.
///
/// Used both for the guess vocabulary (membership checks) and the answer
/// pool (random choice, with used answers removed between rounds).
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Loads all words from the file with the given name, one per line.
    pub fn load(path: impl AsRef<Path>) -> WordmazeResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_lines(&text))
    }

    /// Builds a word list from newline-delimited text.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordmaze::wordle::WordList;
    ///
    /// let words = WordList::from_lines("cranes\nplanes\n");
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("planes"));
    /// ```
    pub fn from_lines(text: &str) -> Self {
        Self {
            words: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Returns whether the given word is in the list (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|entry| entry.eq_ignore_ascii_case(word))
    }

    /// Chooses a word at random, or `None` if the list is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// Removes the first occurrence of the given word, so a used answer is
    /// never selected twice.
    pub fn remove(&mut self, word: &str) {
        if let Some(index) = self
            .words
            .iter()
            .position(|entry| entry.eq_ignore_ascii_case(word))
        {
            self.words.remove(index);
        }
    }

    /// Returns the number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_lines_skips_blanks() {
        let words = WordList::from_lines("apple\n\nbanana\n  \ncherry\n");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let words = WordList::from_lines("Cranes\n");
        assert!(words.contains("cranes"));
        assert!(words.contains("CRANES"));
        assert!(!words.contains("planes"));
    }

    #[test]
    fn test_choose_draws_from_list() {
        let words = WordList::from_lines("alpha\nbravo\ncharlie\n");
        let mut rng = StdRng::seed_from_u64(7);
        let chosen = words.choose(&mut rng).unwrap();
        assert!(words.contains(chosen));
        assert!(WordList::from_lines("").choose(&mut rng).is_none());
    }

    #[test]
    fn test_remove_prevents_reselection() {
        let mut words = WordList::from_lines("alpha\nbravo\n");
        words.remove("alpha");
        assert_eq!(words.len(), 1);
        assert!(!words.contains("alpha"));
        // Removing an absent word is a no-op
        words.remove("alpha");
        assert_eq!(words.len(), 1);
    }
}
