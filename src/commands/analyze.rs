//! Word analysis command
//!
//! Scores a single guess against the answer pool.

use crate::core::Word;
use crate::solver::{Partition, Search, Tried};
use anyhow::{Context, Result, bail};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: Word,
    pub expected_turns: f64,
    pub approximate_score: f64,
    pub classes: usize,
    pub largest_class: usize,
    pub total_candidates: usize,
    pub is_candidate: bool,
}

/// Analyze how well `word` works as an opening guess against `answers`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is neither a guess nor an answer
/// - The search fails
pub fn analyze_word(word: &str, search: &Search, answers: &[Word]) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let is_candidate = answers.contains(&word);
    if !is_candidate && !search.guess_pool().contains(&word) {
        bail!("word '{word}' not in word list");
    }

    let pool: Vec<&Word> = answers.iter().collect();
    let partition = Partition::of(&word, &pool, None)?;
    let approximate_score = search.approximate_score(&word, &pool, None)?;
    let expected_turns = search
        .expected_turns(&word, &pool, None, &Tried::default(), 1)
        .with_context(|| format!("failed to score '{word}'"))?;

    Ok(AnalysisResult {
        expected_turns,
        approximate_score,
        classes: partition.classes.len() + partition.hits,
        largest_class: partition.max_class(),
        total_candidates: answers.len(),
        is_candidate,
        word,
    })
}
