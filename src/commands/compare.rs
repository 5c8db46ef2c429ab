//! Exact vs approximate comparison
//!
//! Runs both search tiers on the same small pool and scores each pick by
//! expected turns.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{Search, Tried};

/// A chosen guess and its expected turns to solve
#[derive(Debug, Clone)]
pub struct ScoredGuess {
    pub word: Word,
    pub expected_turns: f64,
}

/// Result of comparing both search tiers on one pool
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub pool_size: usize,
    pub exact: ScoredGuess,
    pub approximate: ScoredGuess,
}

impl ComparisonResult {
    /// Extra expected turns paid by the approximate pick
    #[must_use]
    pub fn regret(&self) -> f64 {
        self.approximate.expected_turns - self.exact.expected_turns
    }
}

/// Compare the exact and approximate best guesses for `answers`
///
/// # Errors
///
/// Returns `PoolTooLargeForExactSearch` if `answers` exceeds the exact
/// ceiling, or any other search error.
pub fn compare_strategies(search: &Search, answers: &[Word]) -> Result<ComparisonResult> {
    let pool: Vec<&Word> = answers.iter().collect();
    let tried = Tried::default();

    let score = |word: Word| -> Result<ScoredGuess> {
        let expected_turns = search.expected_turns(&word, &pool, None, &tried, 1)?;
        Ok(ScoredGuess {
            word,
            expected_turns,
        })
    };

    let exact = score(search.exact_best_guess(&pool, None, &tried)?)?;
    let approximate = score(search.approximate_best_guess(&pool, None, &tried)?)?;

    Ok(ComparisonResult {
        pool_size: answers.len(),
        exact,
        approximate,
    })
}
