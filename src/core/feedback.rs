//! Wordle feedback as a set of letter-count claims
//!
//! Instead of a raw color pattern, feedback is stored as the constraints it
//! implies about the answer:
//! - greens: position `i` is exactly this letter
//! - yellow claims: at position `i`, letter `L` is absent but the answer has
//!   at least `min_count` copies of `L`
//! - gray claims: the answer has strictly fewer than `max_exclusive` copies of `L`
//!
//! Claims from several guesses against the same answer combine with
//! [`Feedback::merge`].

use super::word::{WORD_LEN, Word};
use crate::error::{Result, SolverError};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Accumulated knowledge about one hidden answer
///
/// Two feedbacks are equal iff their greens, per-position yellow claims and
/// gray claims are equal. Only the strongest yellow claim per
/// `(position, letter)` is kept, so equal knowledge compares equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Feedback {
    greens: [Option<u8>; WORD_LEN],
    yellows: [BTreeMap<u8, u8>; WORD_LEN],
    grays: BTreeSet<(u8, u8)>,
}

impl Feedback {
    /// Empty feedback; admits every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Reproduces Wordle's coloring, including duplicate letters: greens are
    /// assigned first, then for each letter the copies left over in the
    /// answer are handed out as yellows left to right. Surplus copies in the
    /// guess are gray and pin the letter's exact count in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_turns::core::{Feedback, Word};
    ///
    /// let guess = Word::new("aabbb").unwrap();
    /// let answer = Word::new("bbaaa").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.yellow_count(0, b'a'), Some(3));
    /// assert_eq!(feedback.yellow_count(2, b'b'), Some(2));
    /// assert_eq!(feedback.yellow_count(4, b'b'), None);
    /// assert!(feedback.grays().contains(&(b'b', 3)));
    /// ```
    #[must_use]
    // Allow: Index needed to line up guess[i], answer[i] and is_green[i]
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut feedback = Self::default();
        let guess_chars = guess.chars();
        let answer_chars = answer.chars();

        let mut is_green = [false; WORD_LEN];
        for i in 0..WORD_LEN {
            if guess_chars[i] == answer_chars[i] {
                feedback.greens[i] = Some(guess_chars[i]);
                is_green[i] = true;
            }
        }

        let mut seen = [false; 26];
        for i in 0..WORD_LEN {
            let letter = guess_chars[i];
            let slot = usize::from(letter - b'a');
            if is_green[i] || seen[slot] {
                continue;
            }
            seen[slot] = true;

            let total = answer.count_of(letter);
            if total == 0 {
                feedback.grays.insert((letter, 1));
                continue;
            }

            // Earlier copies of this letter are all green, so every
            // non-green copy lives at i or later.
            let greened = (0..WORD_LEN)
                .filter(|&j| is_green[j] && guess_chars[j] == letter)
                .count();
            let need = usize::from(total) - greened;
            let offered: Vec<usize> = (i..WORD_LEN)
                .filter(|&j| !is_green[j] && guess_chars[j] == letter)
                .collect();

            for &position in offered.iter().take(need) {
                feedback.add_yellow(position, letter, total);
            }
            if offered.len() > need {
                feedback.grays.insert((letter, total + 1));
            }
        }

        feedback
    }

    /// Record that `position` is `letter`
    #[must_use]
    pub fn with_green(mut self, position: usize, letter: u8) -> Self {
        self.greens[position] = Some(letter);
        self
    }

    /// Record a yellow claim, keeping the stronger bound if one exists
    #[must_use]
    pub fn with_yellow(mut self, position: usize, letter: u8, min_count: u8) -> Self {
        self.add_yellow(position, letter, min_count);
        self
    }

    /// Record a gray claim: the answer has fewer than `max_exclusive` copies of `letter`
    #[must_use]
    pub fn with_gray(mut self, letter: u8, max_exclusive: u8) -> Self {
        self.grays.insert((letter, max_exclusive));
        self
    }

    fn add_yellow(&mut self, position: usize, letter: u8, min_count: u8) {
        let bound = self.yellows[position].entry(letter).or_insert(min_count);
        *bound = (*bound).max(min_count);
    }

    /// Known letters by position
    #[inline]
    #[must_use]
    pub const fn greens(&self) -> &[Option<u8>; WORD_LEN] {
        &self.greens
    }

    /// Yellow claims at `position` as `letter -> min_count`
    #[inline]
    #[must_use]
    pub fn yellows(&self, position: usize) -> &BTreeMap<u8, u8> {
        &self.yellows[position]
    }

    /// The `min_count` of the yellow claim for `letter` at `position`, if any
    #[must_use]
    pub fn yellow_count(&self, position: usize, letter: u8) -> Option<u8> {
        self.yellows[position].get(&letter).copied()
    }

    /// Gray claims as `(letter, max_exclusive)`
    #[inline]
    #[must_use]
    pub const fn grays(&self) -> &BTreeSet<(u8, u8)> {
        &self.grays
    }

    /// True when every position is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.greens.iter().all(Option::is_some)
    }

    /// True when no claim has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.greens.iter().all(Option::is_none)
            && self.yellows.iter().all(BTreeMap::is_empty)
            && self.grays.is_empty()
    }

    /// Combine two feedbacks into a new value
    ///
    /// # Errors
    /// Returns `SolverError::ConflictingConstraint` if both define a
    /// different green letter at the same position.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        let mut merged = self.clone();
        merged.merge_from(other)?;
        Ok(merged)
    }

    /// Merge `other` into this feedback in place
    ///
    /// Greens must agree, yellow claims keep the larger bound, and gray
    /// claims are unioned without conflict checks. On error `self` is left
    /// unchanged.
    ///
    /// # Errors
    /// Returns `SolverError::ConflictingConstraint` on a green mismatch.
    pub fn merge_from(&mut self, other: &Self) -> Result<()> {
        for (position, (mine, theirs)) in self.greens.iter().zip(&other.greens).enumerate() {
            if let (Some(existing), Some(incoming)) = (*mine, *theirs)
                && existing != incoming
            {
                return Err(SolverError::ConflictingConstraint {
                    position,
                    existing: char::from(existing),
                    incoming: char::from(incoming),
                });
            }
        }

        for (mine, theirs) in self.greens.iter_mut().zip(&other.greens) {
            if theirs.is_some() {
                *mine = *theirs;
            }
        }
        for (position, claims) in other.yellows.iter().enumerate() {
            for (&letter, &min_count) in claims {
                self.add_yellow(position, letter, min_count);
            }
        }
        self.grays.extend(other.grays.iter().copied());

        Ok(())
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let greens: String = self
            .greens
            .iter()
            .map(|g| g.map_or('.', char::from))
            .collect();
        write!(f, "[{greens}]")?;

        for (position, claims) in self.yellows.iter().enumerate() {
            for (&letter, &min_count) in claims {
                write!(f, " {position}:{}>={min_count}", char::from(letter))?;
            }
        }
        for &(letter, max_exclusive) in &self.grays {
            write!(f, " {}<{max_exclusive}", char::from(letter))?;
        }
        Ok(())
    }
}
