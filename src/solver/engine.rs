//! Main guess-selection interface

use super::config::{SearchConfig, SearchTier};
use crate::core::{Feedback, Word};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;

/// Guesses already played on the current path; never chosen again
pub type Tried = FxHashSet<Word>;

/// Guess-selection search
///
/// Holds the guess vocabulary and the tier thresholds. Every operation takes
/// the current answer pool, the feedback gathered so far, and the guesses
/// already tried; none of them mutate shared state.
pub struct Search<'a> {
    pub(super) config: SearchConfig,
    pub(super) guess_pool: &'a [Word],
}

impl<'a> Search<'a> {
    /// Create a search over `guess_pool`
    ///
    /// # Parameters
    /// - `config`: Tier thresholds and candidate trimming sizes
    /// - `guess_pool`: Every word allowed as a guess
    #[must_use]
    pub const fn new(config: SearchConfig, guess_pool: &'a [Word]) -> Self {
        Self { config, guess_pool }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub const fn guess_pool(&self) -> &'a [Word] {
        self.guess_pool
    }

    /// Pick the next guess for `answers`
    ///
    /// Dispatches on [`SearchConfig::tier`]: one or two answers are guessed
    /// directly, small pools are searched exactly, large pools approximately.
    ///
    /// # Errors
    /// - `EmptyAnswerPool` if `answers` is empty
    /// - `PoolTooLargeForExactSearch` if the exact tier is selected for a
    ///   pool above the ceiling
    /// - `ConflictingConstraint` / `EmptyReducedPool` if `feedback` is
    ///   inconsistent with `answers`
    pub fn best_guess(
        &self,
        answers: &[&Word],
        feedback: Option<&Feedback>,
        tried: &Tried,
    ) -> Result<Word> {
        match self.config.tier(answers.len()) {
            SearchTier::Trivial => answers
                .first()
                .map(|&word| word.clone())
                .ok_or(SolverError::EmptyAnswerPool),
            SearchTier::Exact => self.exact_best_guess(answers, feedback, tried),
            SearchTier::Approximate => self.approximate_best_guess(answers, feedback, tried),
        }
    }
}
