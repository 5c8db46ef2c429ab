//! Word solving command
//!
//! Plays the solver against a known target: keeps a running feedback,
//! asks the search for each guess, and narrows the answer pool.

use crate::core::{Feedback, Word, filter};
use crate::solver::{Search, Tried};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_turns: usize,
    /// Played on turn 1 instead of searching
    pub opening: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_turns: 6,
            opening: None,
        }
    }

    #[must_use]
    pub fn with_opening(mut self, opening: impl Into<String>) -> Self {
        self.opening = Some(opening.into());
        self
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
    /// Everything learned about the target
    pub knowledge: Feedback,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    /// Feedback for this guess alone
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` using `search`, drawing candidates from `answers`
///
/// # Errors
///
/// Returns an error if:
/// - The target or opening word is invalid
/// - The target is not in `answers`
/// - The search fails (see [`crate::SolverError`])
pub fn solve_word(config: &SolveConfig, search: &Search, answers: &[Word]) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("invalid target word '{}'", config.target))?;
    if !answers.contains(&target) {
        bail!("'{target}' is not in the answer list");
    }
    let opening = config
        .opening
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid opening word")?;

    let mut knowledge = Feedback::new();
    let mut pool: Vec<&Word> = answers.iter().collect();
    let mut tried = Tried::default();
    let mut guesses = Vec::new();

    for turn in 1..=config.max_turns {
        let guess = match (turn, &opening) {
            (1, Some(word)) => word.clone(),
            _ => search
                .best_guess(&pool, Some(&knowledge), &tried)
                .with_context(|| format!("search failed on turn {turn}"))?,
        };

        let candidates_before = pool.len();
        let feedback = Feedback::calculate(&guess, &target);
        knowledge
            .merge_from(&feedback)
            .with_context(|| format!("feedback for '{guess}' contradicts earlier turns"))?;
        pool = filter(&knowledge, pool);
        tried.insert(guess.clone());

        let success = guess == target;
        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: pool.len(),
        });

        if success {
            return Ok(SolveResult {
                success,
                guesses,
                target,
                knowledge,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
        knowledge,
    })
}
