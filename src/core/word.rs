//! Wordle word representation
//!
//! A Word stores a validated 5-letter lowercase word as text and bytes.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter lowercase Wordle word
///
/// Used both as a guess and as a (hypothetical) answer. Equality is an exact
/// match of the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_turns::core::Word;
    ///
    /// let word = Word::new("agate").unwrap();
    /// assert_eq!(word.text(), "agate");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.chars.iter().filter(|&&ch| ch == letter).count() as u8
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("agate").unwrap();
        assert_eq!(word.text(), "agate");
        assert_eq!(word.chars(), b"agate");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("AGAVE").unwrap();
        assert_eq!(word.text(), "agave");

        let word2 = Word::new("AgAvE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("agat3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("aga e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("agäte"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("agape").unwrap();
        assert_eq!(word.char_at(0), b'a');
        assert_eq!(word.char_at(3), b'p');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_count_of() {
        let word = Word::new("bbaaa").unwrap();
        assert_eq!(word.count_of(b'a'), 3);
        assert_eq!(word.count_of(b'b'), 2);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("agave").unwrap();
        assert_eq!(format!("{word}"), "agave");
    }
}
