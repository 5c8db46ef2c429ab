//! Approximate one-ply search for large pools
//!
//! Scores each guess by the expected size of the pool it leaves behind,
//! without recursing. Lower is better.

use super::engine::{Search, Tried};
use super::partition::Partition;
use super::ranker::rank;
use crate::core::{Feedback, Word};
use crate::error::{Result, SolverError};
use rayon::prelude::*;

/// Score reduction for guesses that could themselves be the answer
pub const ANSWER_BONUS: f64 = 1.0;

impl Search<'_> {
    /// Expected remaining pool size after `guess`, minus [`ANSWER_BONUS`]
    /// when `guess` is one of `answers`
    ///
    /// Each feedback class is weighted by its size and contributes the pool
    /// its feedback leaves in `answers`; a hit leaves only itself.
    ///
    /// # Errors
    /// - `EmptyAnswerPool` if `answers` is empty
    /// - `ConflictingConstraint` if an answer contradicts `feedback`
    /// - `EmptyReducedPool` if a feedback class admits no answer
    pub fn approximate_score(
        &self,
        guess: &Word,
        answers: &[&Word],
        feedback: Option<&Feedback>,
    ) -> Result<f64> {
        if answers.is_empty() {
            return Err(SolverError::EmptyAnswerPool);
        }

        let partition = Partition::of(guess, answers, feedback)?;
        let remaining = partition.hits
            + partition
                .reduced_pools(guess, answers)?
                .iter()
                .map(|(class, reduced)| class.count * reduced.len())
                .sum::<usize>();
        let expected_remaining = remaining as f64 / answers.len() as f64;

        let bonus = if partition.hits > 0 { ANSWER_BONUS } else { 0.0 };
        Ok(expected_remaining - bonus)
    }

    /// Pick the guess with the lowest [`Search::approximate_score`]
    ///
    /// Candidates are the untried guesses trimmed by the letter-frequency
    /// ranker; they are scored in parallel and ties go to the higher-ranked
    /// guess. Falls back to the untried answers if no guess remains.
    ///
    /// # Errors
    /// - `EmptyAnswerPool` if `answers` is empty
    /// - `ConflictingConstraint` if an answer contradicts `feedback`
    /// - `EmptyReducedPool` if `feedback` is inconsistent with `answers`
    pub fn approximate_best_guess(
        &self,
        answers: &[&Word],
        feedback: Option<&Feedback>,
        tried: &Tried,
    ) -> Result<Word> {
        let first = answers.first().ok_or(SolverError::EmptyAnswerPool)?;

        let untried: Vec<&Word> = self
            .guess_pool
            .iter()
            .filter(|word| !tried.contains(*word))
            .collect();
        let mut candidates = rank(answers, &untried, self.config.approximate_candidates);

        if candidates.is_empty() {
            candidates = answers
                .iter()
                .copied()
                .filter(|word| !tried.contains(*word))
                .collect();
        }

        let scores: Vec<f64> = candidates
            .par_iter()
            .map(|&guess| self.approximate_score(guess, answers, feedback))
            .collect::<Result<_>>()?;

        let best = candidates
            .iter()
            .zip(&scores)
            .fold(None, |best: Option<(&Word, f64)>, (&guess, &score)| match best {
                Some((_, lowest)) if lowest <= score => best,
                _ => Some((guess, score)),
            });

        Ok(best.map_or(*first, |(guess, _)| guess).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SearchConfig;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn score_rewards_answer_membership() {
        let answers = words(&["aaaaa", "bbbbb", "ccccc", "ddddd", "abcde"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let search = Search::new(SearchConfig::default(), &answers);

        // ABCDE: five singletons → 1.0 - 1.0
        let separator = search.approximate_score(&answers[4], &pool, None).unwrap();
        assert!(separator.abs() < 1e-9);

        // AAAAA: {aaaaa}, {abcde}, {bbbbb, ccccc, ddddd} → 11/5 - 1.0
        let weak = search.approximate_score(&answers[0], &pool, None).unwrap();
        assert!((weak - 1.2).abs() < 1e-9);
    }

    #[test]
    fn score_without_bonus() {
        let answers = words(&["aaaaa", "bbbbb", "ccccc"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let search = Search::new(SearchConfig::default(), &answers);

        let score = search
            .approximate_score(&Word::new("zzzzz").unwrap(), &pool, None)
            .unwrap();
        assert!((score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn score_uses_filtered_pool_sizes() {
        let answers = words(&["baabb", "baaab", "bbbba"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let search = Search::new(SearchConfig::default(), &answers);

        // Three singleton classes leaving 2, 1 and 3 candidates: (2 + 1 + 3) / 3
        let score = search
            .approximate_score(&Word::new("azzzz").unwrap(), &pool, None)
            .unwrap();
        assert!((score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn inconsistent_prior_is_an_error() {
        let answers = words(&["agape", "agate", "agave", "slate", "crate"]);
        let guesses = words(&["pivot"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let search = Search::new(SearchConfig::default(), &guesses);
        let prior = Feedback::new().with_green(0, b'z');

        assert!(matches!(
            search.approximate_best_guess(&pool, Some(&prior), &Tried::default()),
            Err(SolverError::EmptyReducedPool { .. })
        ));
    }

    #[test]
    fn best_guess_picks_separator() {
        let answers = words(&["aaaaa", "bbbbb", "ccccc", "ddddd", "abcde"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let search = Search::new(SearchConfig::default(), &answers);

        let guess = search
            .approximate_best_guess(&pool, None, &Tried::default())
            .unwrap();
        assert_eq!(guess.text(), "abcde");
    }

    #[test]
    fn falls_back_to_answers_when_guesses_exhausted() {
        let answers = words(&["aaaaa", "bbbbb", "ccccc"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let guesses = words(&["zzzzz"]);
        let search = Search::new(SearchConfig::default(), &guesses);

        let mut tried = Tried::default();
        tried.insert(guesses[0].clone());

        let guess = search.approximate_best_guess(&pool, None, &tried).unwrap();
        assert_eq!(guess.text(), "aaaaa");
    }

    #[test]
    fn empty_pool_is_an_error() {
        let guesses = words(&["zzzzz"]);
        let search = Search::new(SearchConfig::default(), &guesses);

        assert_eq!(
            search.approximate_best_guess(&[], None, &Tried::default()),
            Err(SolverError::EmptyAnswerPool)
        );
    }
}
