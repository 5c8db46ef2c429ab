//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};

/// Color squares for `guess` under its own feedback
///
/// A tile is green when the feedback pins the guessed letter there, yellow
/// when a yellow claim for that letter sits at that position, gray otherwise.
#[must_use]
pub fn feedback_to_emoji(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .enumerate()
        .map(|(position, &ch)| {
            if feedback.greens()[position] == Some(ch) {
                '🟩'
            } else if feedback.yellow_count(position, ch).is_some() {
                '🟨'
            } else {
                '⬜'
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emoji(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        feedback_to_emoji(&guess, &Feedback::calculate(&guess, &answer))
    }

    #[test]
    fn all_gray() {
        assert_eq!(emoji("crane", "fluid"), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn all_green() {
        assert_eq!(emoji("crane", "crane"), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn duplicate_letters_color_left_to_right() {
        // SPEED vs ABIDE: first E yellow, second E gray, D yellow
        assert_eq!(emoji("speed", "abide"), "⬜⬜🟨⬜🟨");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
