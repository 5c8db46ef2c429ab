//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod compare;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use compare::{ComparisonResult, ScoredGuess, compare_strategies};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
