//! Exact expected-turns search
//!
//! Scores a guess by walking the full outcome tree: every feedback class is
//! followed by the best guess for its reduced pool, recursively, until one
//! or two answers remain.

use super::engine::{Search, Tried};
use super::partition::Partition;
use super::ranker::rank;
use crate::core::{Feedback, Word};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;

/// Slack when comparing a score against a lower bound
const BOUND_EPSILON: f64 = 1e-9;

/// Expected turns when playing a non-answer guess with perfect separation
///
/// The guess itself can never be right, so every answer costs at least two.
pub const NON_ANSWER_LOWER_BOUND: f64 = 2.0;

/// Best possible expected turns for `n` answers when guessing one of them
///
/// One answer is hit immediately; the other `n - 1` are each separated and
/// solved on the next turn: `(1 + 2(n - 1)) / n = (2n - 1) / n`.
#[must_use]
pub fn answer_lower_bound(n: usize) -> f64 {
    (2.0 * n as f64 - 1.0) / n as f64
}

impl Search<'_> {
    /// Expected number of turns to solve `answers` if `guess` is played on `turn`
    ///
    /// Terminal cases:
    /// - one answer: `turn` if it is the guess, else `turn + 1`
    /// - two answers: `turn + 0.5` (a coin flip between them)
    ///
    /// Otherwise answers are grouped by the feedback `guess` would produce
    /// (merged with `feedback`). An answer equal to the guess is solved on
    /// `turn`. Each other class is reduced with the constraint filter,
    /// continued with its own best guess at `turn + 1`, and weighted by its
    /// size.
    ///
    /// # Errors
    /// - `EmptyAnswerPool` if `answers` is empty
    /// - `EmptyReducedPool` if a feedback class admits no answer
    /// - any error from the nested [`Search::best_guess`] calls
    pub fn expected_turns(
        &self,
        guess: &Word,
        answers: &[&Word],
        feedback: Option<&Feedback>,
        tried: &Tried,
        turn: u32,
    ) -> Result<f64> {
        let turn_f = f64::from(turn);

        match answers {
            [] => Err(SolverError::EmptyAnswerPool),
            [only] => Ok(if *only == guess { turn_f } else { turn_f + 1.0 }),
            [_, _] => Ok(turn_f + 0.5),
            _ => {
                let partition = Partition::of(guess, answers, feedback)?;
                self.branch_turns(guess, answers, &partition, tried, turn)
            }
        }
    }

    /// Weighted expected turns over the feedback classes of `partition`
    fn branch_turns(
        &self,
        guess: &Word,
        answers: &[&Word],
        partition: &Partition,
        tried: &Tried,
        turn: u32,
    ) -> Result<f64> {
        let mut next_tried = tried.clone();
        next_tried.insert(guess.clone());

        let mut total = partition.hits as f64 * f64::from(turn);
        for (class, reduced) in partition.reduced_pools(guess, answers)? {
            let next = self.best_guess(&reduced, Some(&class.feedback), &next_tried)?;
            let turns = self.expected_turns(
                &next,
                &reduced,
                Some(&class.feedback),
                &next_tried,
                turn + 1,
            )?;
            total += turns * class.count as f64;
        }

        Ok(total / answers.len() as f64)
    }

    /// Find the guess with the lowest expected turns for a small pool
    ///
    /// Answer-pool candidates are tried first and the search stops as soon
    /// as one reaches `(2n - 1) / n`; then non-answer guesses, stopping at
    /// `2.0`. Both candidate lists are trimmed by the letter-frequency
    /// ranker. Guesses that cannot tell any two answers apart are skipped.
    ///
    /// # Errors
    /// - `EmptyAnswerPool` if `answers` is empty
    /// - `PoolTooLargeForExactSearch` if `answers` exceeds the configured ceiling
    /// - any error from [`Search::expected_turns`]
    pub fn exact_best_guess(
        &self,
        answers: &[&Word],
        feedback: Option<&Feedback>,
        tried: &Tried,
    ) -> Result<Word> {
        let n = answers.len();
        if n == 0 {
            return Err(SolverError::EmptyAnswerPool);
        }
        if n > self.config.exact_ceiling {
            return Err(SolverError::PoolTooLargeForExactSearch {
                size: n,
                ceiling: self.config.exact_ceiling,
            });
        }

        let in_pool: FxHashSet<&Word> = answers.iter().copied().collect();

        let answer_side: Vec<&Word> = answers
            .iter()
            .copied()
            .filter(|word| !tried.contains(*word))
            .collect();
        let answer_side = rank(answers, &answer_side, self.config.exact_answer_candidates);

        let guess_side: Vec<&Word> = self
            .guess_pool
            .iter()
            .filter(|word| !in_pool.contains(word) && !tried.contains(*word))
            .collect();
        let guess_side = rank(answers, &guess_side, self.config.exact_guess_candidates);

        let mut best: Option<(&Word, f64)> = None;
        for (candidates, bound) in [
            (answer_side, answer_lower_bound(n)),
            (guess_side, NON_ANSWER_LOWER_BOUND),
        ] {
            for guess in candidates {
                let partition = Partition::of(guess, answers, feedback)?;
                // Guesses that split nothing are not candidates: the
                // recursion would be handed the same pool again.
                if !partition.splits() {
                    continue;
                }

                let turns = match answers {
                    [_, _, _, ..] => self.branch_turns(guess, answers, &partition, tried, 1)?,
                    _ => self.expected_turns(guess, answers, feedback, tried, 1)?,
                };
                if turns <= bound + BOUND_EPSILON {
                    return Ok(guess.clone());
                }
                if best.is_none_or(|(_, lowest)| turns < lowest) {
                    best = Some((guess, turns));
                }
            }
        }

        // Only reachable when every answer was already tried
        Ok(best.map_or(answers[0], |(guess, _)| guess).clone())
    }
}
