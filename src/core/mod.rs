//! Core domain types for Wordle
//!
//! Words, the feedback claim model, and constraint filtering. Everything here
//! is pure and deterministic.

mod constraint;
mod feedback;
mod word;

pub use constraint::{filter, is_possible};
pub use feedback::Feedback;
pub use word::{WORD_LEN, Word, WordError};
