//! Error types shared by the claim model and the search engine

use crate::core::{Feedback, Word};
use thiserror::Error;

/// Errors surfaced by feedback merging and guess-selection search
///
/// None of these are retried internally; a search either returns a complete
/// result or fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Two feedbacks disagree on the green letter at a position, so they
    /// cannot describe the same answer.
    #[error("conflicting green at position {position}: '{existing}' vs '{incoming}'")]
    ConflictingConstraint {
        position: usize,
        existing: char,
        incoming: char,
    },

    /// A feedback class admitted no candidate from the pool it was derived from.
    #[error("feedback from guess '{guess}' leaves no candidates: {feedback}")]
    EmptyReducedPool { guess: Word, feedback: Feedback },

    /// Exact search was requested for a pool above the configured ceiling.
    #[error("exact search refused: pool of {size} exceeds ceiling of {ceiling}")]
    PoolTooLargeForExactSearch { size: usize, ceiling: usize },

    /// A guess was requested for, or scored against, an empty answer pool.
    #[error("answer pool is empty")]
    EmptyAnswerPool,
}

/// Result alias for solver operations
pub type Result<T> = std::result::Result<T, SolverError>;
