//! Word list loading utilities
//!
//! Reads newline-separated word lists from files or string slices.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {0} contains no valid words")]
    Empty(PathBuf),
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Empty`
/// if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_turns::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    if words.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    Ok(words)
}

/// Parse one word per line, skipping blank and invalid lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_turns::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["agape", "agate", "nope"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["agape", "agate", "agave"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "agape");
        assert_eq!(words[2].text(), "agave");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["agape", "toolong", "abc", "agate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "agape");
        assert_eq!(words[1].text(), "agate");
    }

    #[test]
    fn words_from_lines_trims_and_skips_blanks() {
        let words = words_from_lines("  agape\n\nAGATE\r\nag4ve\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["agape", "agate"]);
    }

    #[test]
    fn load_from_missing_file() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "wordle_turns_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "agape\nagate\n\nagave\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
    }

    #[test]
    fn load_from_file_without_words() {
        let path = std::env::temp_dir().join(format!(
            "wordle_turns_loader_empty_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "\n12345\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoadError::Empty(_))));
    }
}
