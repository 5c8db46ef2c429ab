//! Benchmark command
//!
//! Plays the solver against many targets and summarizes the guess counts.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Search;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of targets (solved targets only)
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Benchmark options
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    /// Forced first guess for every target
    pub opening: Option<String>,
    /// Show a progress bar on stderr
    pub progress: bool,
}

/// Solve every word in `targets` and collect statistics
///
/// Targets are solved in parallel; each game is independent.
///
/// # Errors
///
/// Returns an error if any game fails (invalid opening, target missing
/// from `answers`, or a search error).
pub fn run_benchmark(
    search: &Search,
    answers: &[Word],
    targets: &[Word],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    let pb = if config.progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let games: Vec<(Word, bool, usize)> = targets
        .par_iter()
        .map(|target| -> Result<(Word, bool, usize)> {
            let mut solve = SolveConfig::new(target.text().to_string());
            if let Some(opening) = &config.opening {
                solve = solve.with_opening(opening.as_str());
            }
            let result = solve_word(&solve, search, answers)?;
            pb.inc(1);
            Ok((target.clone(), result.success, result.guesses.len()))
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    for (target, success, guesses) in games {
        if success {
            total_guesses += guesses;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed.push(target);
        }
    }

    let solved = targets.len() - failed.len();
    let average_guesses = if solved == 0 {
        0.0
    } else {
        total_guesses as f64 / solved as f64
    };
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_words: targets.len(),
        solved,
        failed,
        total_guesses,
        average_guesses,
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        words_per_second: if secs > 0.0 {
            targets.len() as f64 / secs
        } else {
            0.0
        },
    })
}
