//! Word lists for Wordle solving
//!
//! The search only needs a guess vocabulary and an answer list; this module
//! supplies them from plain text files.

pub mod loader;

use crate::core::Word;
use loader::{LoadError, load_from_file};
use std::path::Path;

/// Source of the guess vocabulary and the answer list
pub trait WordSource {
    /// Words that may be the hidden answer
    fn answer_words(&self) -> &[Word];

    /// Words accepted as guesses but never the answer
    fn guess_only_words(&self) -> &[Word];

    /// Every word accepted as a guess: answers first, then guess-only words
    fn all_words(&self) -> Vec<Word> {
        self.answer_words()
            .iter()
            .chain(self.guess_only_words())
            .cloned()
            .collect()
    }
}

/// Word lists held in memory, typically read from two text files
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    answers: Vec<Word>,
    guess_only: Vec<Word>,
}

impl WordLists {
    /// Build from in-memory lists
    ///
    /// Guess-only words that also appear among the answers are dropped so
    /// that `all_words` holds no duplicates.
    #[must_use]
    pub fn new(answers: Vec<Word>, guess_only: Vec<Word>) -> Self {
        let known: rustc_hash::FxHashSet<&Word> = answers.iter().collect();
        let guess_only = guess_only
            .into_iter()
            .filter(|word| !known.contains(word))
            .collect();
        Self {
            answers,
            guess_only,
        }
    }

    /// Read an answer list and an optional guess-only list
    ///
    /// # Errors
    /// Returns `LoadError` if either file cannot be read or is empty.
    pub fn from_files(answers: &Path, guess_only: Option<&Path>) -> Result<Self, LoadError> {
        let answers = load_from_file(answers)?;
        let guess_only = guess_only.map(load_from_file).transpose()?.unwrap_or_default();
        Ok(Self::new(answers, guess_only))
    }
}

impl WordSource for WordLists {
    fn answer_words(&self) -> &[Word] {
        &self.answers
    }

    fn guess_only_words(&self) -> &[Word] {
        &self.guess_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    #[test]
    fn all_words_chains_answers_and_guesses() {
        let lists = WordLists::new(
            words_from_slice(&["agape", "agate"]),
            words_from_slice(&["pivot", "crane"]),
        );

        let all: Vec<String> = lists.all_words().iter().map(ToString::to_string).collect();
        assert_eq!(all, ["agape", "agate", "pivot", "crane"]);
    }

    #[test]
    fn guess_only_duplicates_dropped() {
        let lists = WordLists::new(
            words_from_slice(&["agape", "agate"]),
            words_from_slice(&["agate", "pivot"]),
        );

        assert_eq!(lists.guess_only_words().len(), 1);
        assert_eq!(lists.all_words().len(), 3);
    }

    #[test]
    fn from_files_without_guess_list() {
        let path = std::env::temp_dir().join(format!(
            "wordle_turns_answers_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "agape\nagate\nagave\n").unwrap();

        let lists = WordLists::from_files(&path, None).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(lists.answer_words().len(), 3);
        assert!(lists.guess_only_words().is_empty());
    }
}
