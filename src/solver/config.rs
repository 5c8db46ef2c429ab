//! Search configuration and tier selection
//!
//! The answer-pool size decides how hard the search works for a guess.

/// Pools at or below this size need no search at all
pub const TRIVIAL_POOL_SIZE: usize = 2;

/// Tunables for guess-selection search
///
/// ## How Tiers Work
///
/// ```text
/// if n <= 2                 → Trivial      (guess any remaining answer)
/// else if n < exact_cutoff  → Exact        (recursive expected-turns search)
/// else                      → Approximate  (one-ply partition-size heuristic)
/// ```
///
/// Exact search refuses pools larger than `exact_ceiling` no matter how it
/// is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Pools smaller than this are solved exactly (default: 5)
    pub exact_cutoff: usize,

    /// Exact search rejects pools larger than this (default: 10)
    pub exact_ceiling: usize,

    /// Answer-pool candidates kept by the ranker in exact search (default: 10)
    pub exact_answer_candidates: usize,

    /// Non-answer guesses kept by the ranker in exact search (default: 100)
    pub exact_guess_candidates: usize,

    /// Guesses kept by the ranker in approximate search (default: 100)
    pub approximate_candidates: usize,
}

impl SearchConfig {
    /// Choose the search tier for an answer pool of `num_answers` words
    #[must_use]
    pub const fn tier(&self, num_answers: usize) -> SearchTier {
        if num_answers <= TRIVIAL_POOL_SIZE {
            SearchTier::Trivial
        } else if num_answers < self.exact_cutoff {
            SearchTier::Exact
        } else {
            SearchTier::Approximate
        }
    }

    #[must_use]
    pub const fn with_exact_cutoff(mut self, exact_cutoff: usize) -> Self {
        self.exact_cutoff = exact_cutoff;
        self
    }

    #[must_use]
    pub const fn with_exact_ceiling(mut self, exact_ceiling: usize) -> Self {
        self.exact_ceiling = exact_ceiling;
        self
    }

    #[must_use]
    pub const fn with_exact_answer_candidates(mut self, keep: usize) -> Self {
        self.exact_answer_candidates = keep;
        self
    }

    #[must_use]
    pub const fn with_exact_guess_candidates(mut self, keep: usize) -> Self {
        self.exact_guess_candidates = keep;
        self
    }

    #[must_use]
    pub const fn with_approximate_candidates(mut self, keep: usize) -> Self {
        self.approximate_candidates = keep;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exact_cutoff: 5,
            exact_ceiling: 10,
            exact_answer_candidates: 10,
            exact_guess_candidates: 100,
            approximate_candidates: 100,
        }
    }
}

/// How a guess is chosen for a given pool size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTier {
    /// One or two answers left: guess one of them
    Trivial,

    /// Few answers: minimize true expected turns recursively
    Exact,

    /// Many answers: minimize expected remaining pool size
    Approximate,
}
