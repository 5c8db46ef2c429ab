//! Grouping answers by the feedback a guess would produce
//!
//! Answers that yield equal feedback are indistinguishable after the guess,
//! so the search treats each group as one outcome weighted by its size.

use crate::core::{Feedback, Word, filter};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashMap;

/// One group of answers sharing the same (merged) feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackClass {
    pub feedback: Feedback,
    pub count: usize,
}

/// Outcome of playing a guess against every answer in a pool
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Answers equal to the guess (solved on the spot)
    pub hits: usize,
    /// Remaining answers grouped by feedback, in first-seen order
    pub classes: Vec<FeedbackClass>,
}

impl Partition {
    /// Group `answers` by the feedback `guess` produces against each
    ///
    /// When `prior` is given, each feedback is merged with it before grouping.
    ///
    /// # Errors
    /// Returns `SolverError::ConflictingConstraint` if an answer's feedback
    /// contradicts `prior`.
    pub fn of(guess: &Word, answers: &[&Word], prior: Option<&Feedback>) -> Result<Self> {
        let mut index: FxHashMap<Feedback, usize> = FxHashMap::default();
        let mut partition = Self::default();

        for &answer in answers {
            if answer == guess {
                partition.hits += 1;
                continue;
            }

            let raw = Feedback::calculate(guess, answer);
            let feedback = match prior {
                Some(prior) => prior.merge(&raw)?,
                None => raw,
            };

            if let Some(&slot) = index.get(&feedback) {
                partition.classes[slot].count += 1;
            } else {
                index.insert(feedback.clone(), partition.classes.len());
                partition.classes.push(FeedbackClass { feedback, count: 1 });
            }
        }

        Ok(partition)
    }

    /// Whether the guess tells at least two answers apart
    #[must_use]
    pub fn splits(&self) -> bool {
        self.hits + self.classes.len() > 1
    }

    /// Size of the largest outcome
    #[must_use]
    pub fn max_class(&self) -> usize {
        self.classes
            .iter()
            .map(|class| class.count)
            .max()
            .unwrap_or(0)
            .max(self.hits)
    }

    /// Candidates each class leaves behind in `answers`
    ///
    /// The reduced pool is the constraint filter applied to the whole of
    /// `answers` with the class feedback, so it can hold more words than the
    /// class itself (a yellow claim only bounds a letter count from below).
    ///
    /// # Errors
    /// Returns `SolverError::EmptyReducedPool` if a class admits no answer.
    pub fn reduced_pools<'p, 'a>(
        &'p self,
        guess: &Word,
        answers: &[&'a Word],
    ) -> Result<Vec<(&'p FeedbackClass, Vec<&'a Word>)>> {
        self.classes
            .iter()
            .map(|class| {
                let reduced = filter(&class.feedback, answers.iter().copied());
                if reduced.is_empty() {
                    return Err(SolverError::EmptyReducedPool {
                        guess: guess.clone(),
                        feedback: class.feedback.clone(),
                    });
                }
                Ok((class, reduced))
            })
            .collect()
    }
}
