//! Guess-selection search
//!
//! Picks the guess that minimizes expected turns-to-solve, switching between
//! an exact recursive search for small pools and a one-ply heuristic for
//! large ones.

mod approximate;
mod config;
mod engine;
mod exact;
mod partition;
mod ranker;

pub use approximate::ANSWER_BONUS;
pub use config::{SearchConfig, SearchTier, TRIVIAL_POOL_SIZE};
pub use engine::{Search, Tried};
pub use exact::{NON_ANSWER_LOWER_BOUND, answer_lower_bound};
pub use partition::{FeedbackClass, Partition};
pub use ranker::{LetterFrequencies, rank};
