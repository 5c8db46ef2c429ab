//! Wordle Turns
//!
//! A Wordle solver that picks the guess minimizing the expected number of
//! turns to find the answer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_turns::core::{Feedback, Word, filter};
//! use wordle_turns::solver::{Search, SearchConfig, Tried};
//!
//! let answers: Vec<Word> = ["agape", "agate", "agave"]
//!     .iter()
//!     .map(|s| Word::new(*s).unwrap())
//!     .collect();
//! let pool: Vec<&Word> = answers.iter().collect();
//!
//! let search = Search::new(SearchConfig::default(), &answers);
//! let guess = search.best_guess(&pool, None, &Tried::default()).unwrap();
//!
//! // Narrow the pool with the feedback from the real answer
//! let feedback = Feedback::calculate(&guess, &answers[2]);
//! let remaining = filter(&feedback, pool.iter().copied());
//! assert!(remaining.len() < pool.len());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Guess-selection search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
