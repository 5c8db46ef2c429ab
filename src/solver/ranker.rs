//! Letter-frequency ranking of candidate guesses
//!
//! A cheap pre-trimming heuristic: guesses whose letters are common among
//! the remaining answers, at positions that are still undecided, are ranked
//! first. The search only ever evaluates the top of this ranking.

use crate::core::{WORD_LEN, Word};

const ALPHABET: usize = 26;

#[inline]
fn slot(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// Letter statistics of an answer pool
///
/// Positions where every answer has the same letter are "determined": they
/// carry no information, so they are left out of the global counts and
/// their positional weight is zero.
#[derive(Debug, Clone)]
pub struct LetterFrequencies {
    positional: [[u32; ALPHABET]; WORD_LEN],
    global: [u32; ALPHABET],
    determined: [bool; WORD_LEN],
    weights: [f64; WORD_LEN],
}

impl LetterFrequencies {
    /// Count letter frequencies over `pool`
    #[must_use]
    pub fn from_pool(pool: &[&Word]) -> Self {
        let mut positional = [[0u32; ALPHABET]; WORD_LEN];
        for word in pool {
            for (position, &ch) in word.chars().iter().enumerate() {
                positional[position][slot(ch)] += 1;
            }
        }

        let determined: [bool; WORD_LEN] = std::array::from_fn(|position| {
            positional[position].iter().filter(|&&count| count > 0).count() == 1
        });

        let mut global = [0u32; ALPHABET];
        for word in pool {
            for (position, &ch) in word.chars().iter().enumerate() {
                if !determined[position] {
                    global[slot(ch)] += 1;
                }
            }
        }

        // Positional hits matter less as more of the word is pinned down
        let open = determined.iter().filter(|&&d| !d).count();
        let relevance = open as f64 / WORD_LEN as f64;
        let weights = determined.map(|d| if d { 0.0 } else { relevance });

        Self {
            positional,
            global,
            determined,
            weights,
        }
    }

    /// Whether every word in the pool shares the letter at `position`
    #[must_use]
    pub fn is_determined(&self, position: usize) -> bool {
        self.determined[position]
    }

    /// Informativeness score of `guess`; higher is better
    ///
    /// Repeated letters only earn their global frequency once.
    #[must_use]
    pub fn score(&self, guess: &Word) -> f64 {
        let mut seen = [false; ALPHABET];
        let mut score = 0.0;

        for (position, &ch) in guess.chars().iter().enumerate() {
            let letter = slot(ch);
            score += self.weights[position] * f64::from(self.positional[position][letter]);
            if !seen[letter] {
                seen[letter] = true;
                score += f64::from(self.global[letter]);
            }
        }

        score
    }
}

/// Rank `candidates` by informativeness against `pool`, keeping the best `keep_n`
///
/// Ties keep the order of `candidates`.
///
/// # Examples
/// ```
/// use wordle_turns::core::Word;
/// use wordle_turns::solver::rank;
///
/// let answers: Vec<Word> = ["agape", "agate", "agave"]
///     .iter()
///     .map(|s| Word::new(*s).unwrap())
///     .collect();
/// let guesses: Vec<Word> = ["crane", "pivot", "agate"]
///     .iter()
///     .map(|s| Word::new(*s).unwrap())
///     .collect();
///
/// let pool: Vec<&Word> = answers.iter().collect();
/// let candidates: Vec<&Word> = guesses.iter().collect();
/// assert_eq!(rank(&pool, &candidates, 1)[0].text(), "pivot");
/// ```
#[must_use]
pub fn rank<'a>(pool: &[&Word], candidates: &[&'a Word], keep_n: usize) -> Vec<&'a Word> {
    let frequencies = LetterFrequencies::from_pool(pool);

    let mut scored: Vec<(&'a Word, f64)> = candidates
        .iter()
        .map(|&guess| (guess, frequencies.score(guess)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(keep_n)
        .map(|(guess, _)| guess)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn determined_positions_detected() {
        let answers = words(&["agape", "agate", "agave"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let frequencies = LetterFrequencies::from_pool(&pool);

        assert!(frequencies.is_determined(0));
        assert!(frequencies.is_determined(1));
        assert!(frequencies.is_determined(2));
        assert!(!frequencies.is_determined(3));
        assert!(frequencies.is_determined(4));
    }

    #[test]
    fn determined_letters_score_nothing() {
        let answers = words(&["agape", "agate", "agave"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let frequencies = LetterFrequencies::from_pool(&pool);

        // A, G and E only ever appear at determined positions
        assert!(frequencies.score(&Word::new("gaaee").unwrap()).abs() < f64::EPSILON);
        // P, V, T each once globally; T also at position 3 with weight 1/5
        assert!((frequencies.score(&Word::new("pivot").unwrap()) - 3.0).abs() < 1e-9);
        assert!((frequencies.score(&Word::new("agate").unwrap()) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn repeated_letters_counted_once_globally() {
        let answers = words(&["abcde", "fghij"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let frequencies = LetterFrequencies::from_pool(&pool);

        // Each position open; weight 1.0, global counts 1 per letter
        let single = frequencies.score(&Word::new("axxxx").unwrap());
        let repeated = frequencies.score(&Word::new("aaaaa").unwrap());
        assert!((single - 2.0).abs() < 1e-9);
        assert!((repeated - 2.0).abs() < 1e-9);
    }

    #[test]
    fn rank_selects_pivot_guess() {
        let answers = words(&["agape", "agate", "agave"]);
        let guesses = words(&["agape", "agate", "agave", "crane", "pivot"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let candidates: Vec<&Word> = guesses.iter().collect();

        let ranked = rank(&pool, &candidates, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].text(), "pivot");
    }

    #[test]
    fn rank_ties_keep_candidate_order() {
        let answers = words(&["aaaaa"]);
        let guesses = words(&["zzzzz", "yyyyy", "xxxxx"]);
        let pool: Vec<&Word> = answers.iter().collect();
        let candidates: Vec<&Word> = guesses.iter().collect();

        let ranked: Vec<&str> = rank(&pool, &candidates, 10)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(ranked, ["zzzzz", "yyyyy", "xxxxx"]);
    }

    #[test]
    fn rank_empty_inputs() {
        let guesses = words(&["crane"]);
        let candidates: Vec<&Word> = guesses.iter().collect();

        assert_eq!(rank(&[], &candidates, 5).len(), 1);
        assert!(rank(&[], &[], 5).is_empty());
        assert!(rank(&[], &candidates, 0).is_empty());
    }
}
