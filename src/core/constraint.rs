//! Constraint filtering
//!
//! Tests words against accumulated [`Feedback`] and shrinks candidate pools.

use super::{Feedback, Word};

/// Check whether `word` could still be the answer given `feedback`
///
/// Checks greens, then yellow claims (letter absent at that position and
/// present at least `min_count` times), then gray claims (present fewer than
/// `max_exclusive` times). Empty feedback admits every word.
///
/// # Examples
/// ```
/// use wordle_turns::core::{Feedback, Word, is_possible};
///
/// let guess = Word::new("agape").unwrap();
/// let answer = Word::new("agate").unwrap();
/// let feedback = Feedback::calculate(&guess, &answer);
///
/// assert!(is_possible(&feedback, &answer));
/// assert!(!is_possible(&feedback, &guess));
/// ```
#[must_use]
pub fn is_possible(feedback: &Feedback, word: &Word) -> bool {
    let chars = word.chars();

    let greens_match = feedback
        .greens()
        .iter()
        .zip(chars)
        .all(|(green, &ch)| green.is_none_or(|letter| letter == ch));
    if !greens_match {
        return false;
    }

    for (position, &ch) in chars.iter().enumerate() {
        for (&letter, &min_count) in feedback.yellows(position) {
            if ch == letter || word.count_of(letter) < min_count {
                return false;
            }
        }
    }

    feedback
        .grays()
        .iter()
        .all(|&(letter, max_exclusive)| word.count_of(letter) < max_exclusive)
}

/// Keep the words of `pool` that `feedback` admits, preserving order
pub fn filter<'a, I>(feedback: &Feedback, pool: I) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    pool.into_iter()
        .filter(|word| is_possible(feedback, word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn empty_feedback_admits_everything() {
        let pool = words(&["aaaaa", "abcde", "zzzzz"]);
        assert_eq!(filter(&Feedback::new(), &pool).len(), 3);
    }

    #[test]
    fn green_mismatch_rejected() {
        let feedback = Feedback::new().with_green(0, b'a');
        assert!(is_possible(&feedback, &Word::new("agate").unwrap()));
        assert!(!is_possible(&feedback, &Word::new("bgate").unwrap()));
    }

    #[test]
    fn yellow_requires_letter_elsewhere_with_count() {
        let feedback = Feedback::new().with_yellow(0, b'a', 2);

        assert!(!is_possible(&feedback, &Word::new("abcde").unwrap())); // at position 0
        assert!(!is_possible(&feedback, &Word::new("bacde").unwrap())); // only one a
        assert!(is_possible(&feedback, &Word::new("bacda").unwrap()));
    }

    #[test]
    fn gray_bounds_letter_count() {
        let absent = Feedback::new().with_gray(b'z', 1);
        assert!(is_possible(&absent, &Word::new("abcde").unwrap()));
        assert!(!is_possible(&absent, &Word::new("abcdz").unwrap()));

        let at_most_two = Feedback::new().with_gray(b'b', 3);
        assert!(is_possible(&at_most_two, &Word::new("bbaaa").unwrap()));
        assert!(!is_possible(&at_most_two, &Word::new("bbbaa").unwrap()));
    }

    #[test]
    fn answer_survives_own_feedback() {
        let pool = words(&[
            "aabbb", "bbaaa", "agape", "agate", "agave", "speed", "abide", "robot", "floor",
            "eerie", "crane", "aaaaa", "abcde",
        ]);
        for guess in &pool {
            for answer in &pool {
                let feedback = Feedback::calculate(guess, answer);
                assert!(
                    is_possible(&feedback, answer),
                    "{answer} rejected by its own feedback for guess {guess}: {feedback}"
                );
            }
        }
    }

    #[test]
    fn filter_preserves_order() {
        let pool = words(&["agave", "crane", "agape", "agate"]);
        let feedback = Feedback::new().with_green(0, b'a').with_green(1, b'g');

        let kept: Vec<&str> = filter(&feedback, &pool).iter().map(|w| w.text()).collect();
        assert_eq!(kept, ["agave", "agape", "agate"]);
    }

    #[test]
    fn filter_excludes_the_guess_itself() {
        let pool = words(&["agape", "agate", "agave"]);
        let feedback = Feedback::calculate(&pool[0], &pool[1]);

        // Only the gray P is learned, which AGAVE satisfies too
        let kept: Vec<&str> = filter(&feedback, &pool).iter().map(|w| w.text()).collect();
        assert_eq!(kept, ["agate", "agave"]);
    }
}
