//! Share-text formatting.
//!
//! Renders a finished game into the multi-line emoji summary players paste
//! into chats: a header with the puzzle number and attempt count, optional
//! streak and perfect-game annotations, one emoji row per guess, and a
//! fixed call-to-action footer. Output is fully deterministic.

use crate::feedback::{Feedback, GuessResult};

/// Emoji for a win within 2 attempts.
const EMOJI_WIN_FAST: &str = "🔥";
/// Emoji for a win within 4 attempts.
const EMOJI_WIN_SOLID: &str = "🎯";
/// Emoji for any slower win.
const EMOJI_WIN_SLOW: &str = "🎵";
/// Emoji for a loss.
const EMOJI_LOSS: &str = "💔";

/// Allowed attempts for a melody of the given length.
///
/// Longer melodies grant more guesses. These thresholds are a game-balance
/// rule shared with the mobile clients and must not drift:
/// up to 5 notes -> 6 guesses, up to 8 -> 7, up to 15 -> 8, beyond -> 10.
pub fn max_guesses_for_length(melody_length: usize) -> u32 {
    match melody_length {
        0..=5 => 6,
        6..=8 => 7,
        9..=15 => 8,
        _ => 10,
    }
}

/// Difficulty label for a melody of the given length.
pub fn difficulty_label(melody_length: usize) -> &'static str {
    match melody_length {
        0..=5 => "Quick",
        6..=8 => "Standard",
        9..=15 => "Extended",
        _ => "Epic",
    }
}

/// Formats the shareable summary of a finished game.
///
/// # Arguments
/// * `guesses` - Scored guess history, one entry per submitted guess.
/// * `puzzle_number` - The daily puzzle number (e.g., 42 for "Melodyx #42").
/// * `won` - Whether the final guess solved the melody.
/// * `melody_length` - Note count of the target, for the difficulty line
///   and the default guess budget.
/// * `streak` - Current win streak; rendered when 2 or more.
/// * `max_guesses` - Attempt budget; derived from `melody_length` via
///   [`max_guesses_for_length`] when `None`.
///
/// # Example
/// ```
/// use melodyx_core::feedback::{Feedback, GuessResult};
/// use melodyx_core::note::Note;
/// use melodyx_core::share::generate_share_text;
///
/// let winning_row = vec![
///     GuessResult::new(Note::C, Feedback::Correct),
///     GuessResult::new(Note::E, Feedback::Correct),
///     GuessResult::new(Note::G, Feedback::Correct),
/// ];
/// let text = generate_share_text(&[winning_row], 7, true, 3, None, None);
/// assert!(text.contains("Melodyx #7"));
/// assert!(text.contains("PERFECT"));
/// ```
pub fn generate_share_text(
    guesses: &[Vec<GuessResult>],
    puzzle_number: u32,
    won: bool,
    melody_length: usize,
    streak: Option<u32>,
    max_guesses: Option<u32>,
) -> String {
    let max_guesses = max_guesses.unwrap_or_else(|| max_guesses_for_length(melody_length));
    let attempts = guesses.len() as u32;

    let emoji = if won {
        match attempts {
            0..=2 => EMOJI_WIN_FAST,
            3..=4 => EMOJI_WIN_SOLID,
            _ => EMOJI_WIN_SLOW,
        }
    } else {
        EMOJI_LOSS
    };
    let score = if won {
        format!("{}/{}", attempts, max_guesses)
    } else {
        format!("X/{}", max_guesses)
    };

    let mut lines = Vec::new();
    lines.push(format!("Melodyx #{} {} {}", puzzle_number, emoji, score));

    if won && attempts == 1 {
        lines.push("PERFECT! First try! 🏆".to_string());
    }
    if let Some(streak) = streak {
        if streak >= 2 {
            lines.push(format!("{}🔥 streak", streak));
        }
    }
    lines.push(format!(
        "{} · {} notes",
        difficulty_label(melody_length),
        melody_length
    ));

    lines.push(String::new());
    for guess in guesses {
        lines.push(guess.iter().map(|r| square_for(r.feedback)).collect());
    }

    lines.push(String::new());
    lines.push("Can you guess the melody? 🎧".to_string());
    lines.push("Play at https://melodyx.app".to_string());

    lines.join("\n")
}

/// Emoji square for one feedback value.
fn square_for(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Correct => "🟩",
        Feedback::Present => "🟨",
        Feedback::Absent => "⬛",
        Feedback::Empty => "⬜",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Note;
    use pretty_assertions::assert_eq;

    fn row(feedbacks: &[Feedback]) -> Vec<GuessResult> {
        feedbacks
            .iter()
            .map(|&f| GuessResult::new(Note::C, f))
            .collect()
    }

    #[test]
    fn guess_budget_thresholds() {
        assert_eq!(max_guesses_for_length(3), 6);
        assert_eq!(max_guesses_for_length(5), 6);
        assert_eq!(max_guesses_for_length(6), 7);
        assert_eq!(max_guesses_for_length(8), 7);
        assert_eq!(max_guesses_for_length(9), 8);
        assert_eq!(max_guesses_for_length(15), 8);
        assert_eq!(max_guesses_for_length(16), 10);
    }

    #[test]
    fn win_in_two_of_six() {
        let guesses = vec![
            row(&[Feedback::Present, Feedback::Absent, Feedback::Correct]),
            row(&[Feedback::Correct, Feedback::Correct, Feedback::Correct]),
        ];
        let text = generate_share_text(&guesses, 42, true, 3, None, None);
        assert!(text.contains("Melodyx #42"), "{}", text);
        assert!(text.contains("2/6"), "{}", text);
        assert!(text.contains(EMOJI_WIN_FAST), "{}", text);
        assert!(text.contains("🟨⬛🟩"), "{}", text);
        assert!(text.contains("🟩🟩🟩"), "{}", text);
        assert!(!text.contains("PERFECT"), "{}", text);
    }

    #[test]
    fn loss_shows_x_score_and_loss_emoji() {
        let guesses: Vec<Vec<GuessResult>> = (0..6)
            .map(|_| row(&[Feedback::Absent, Feedback::Absent, Feedback::Present]))
            .collect();
        let text = generate_share_text(&guesses, 9, false, 3, None, None);
        assert!(text.contains("X/6"), "{}", text);
        assert!(text.contains(EMOJI_LOSS), "{}", text);
    }

    #[test]
    fn one_guess_win_is_perfect() {
        let guesses = vec![row(&[Feedback::Correct; 3])];
        let text = generate_share_text(&guesses, 1, true, 3, None, None);
        assert!(text.contains("PERFECT"), "{}", text);
        assert!(text.contains("1/6"), "{}", text);
    }

    #[test]
    fn streak_annotation() {
        let guesses = vec![row(&[Feedback::Correct; 3])];
        let text = generate_share_text(&guesses, 10, true, 3, Some(5), None);
        assert!(text.contains("5🔥 streak"), "{}", text);

        let no_streak = generate_share_text(&guesses, 10, true, 3, Some(1), None);
        assert!(!no_streak.contains("streak"), "{}", no_streak);
    }

    #[test]
    fn explicit_max_guesses_overrides_derivation() {
        let guesses = vec![row(&[Feedback::Correct; 3])];
        let text = generate_share_text(&guesses, 3, true, 3, None, Some(9));
        assert!(text.contains("1/9"), "{}", text);
    }

    #[test]
    fn grid_has_one_row_per_guess() {
        let guesses = vec![
            row(&[Feedback::Absent; 4]),
            row(&[Feedback::Present; 4]),
            row(&[Feedback::Correct; 4]),
        ];
        let text = generate_share_text(&guesses, 5, true, 4, None, None);
        let rows: Vec<&str> = text
            .lines()
            .filter(|l| l.contains("🟩") || l.contains("🟨") || l.contains("⬛"))
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "🟨🟨🟨🟨");
    }

    #[test]
    fn slower_wins_get_other_emoji() {
        let four: Vec<Vec<GuessResult>> =
            (0..4).map(|_| row(&[Feedback::Correct; 3])).collect();
        let text = generate_share_text(&four, 2, true, 3, None, None);
        assert!(text.contains(EMOJI_WIN_SOLID), "{}", text);

        let five: Vec<Vec<GuessResult>> =
            (0..5).map(|_| row(&[Feedback::Correct; 3])).collect();
        let text = generate_share_text(&five, 2, true, 3, None, None);
        assert!(text.contains(EMOJI_WIN_SLOW), "{}", text);
    }

    #[test]
    fn footer_is_fixed() {
        let text = generate_share_text(&[], 1, false, 5, None, None);
        assert!(text.ends_with("Can you guess the melody? 🎧\nPlay at https://melodyx.app"));
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(difficulty_label(4), "Quick");
        assert_eq!(difficulty_label(7), "Standard");
        assert_eq!(difficulty_label(12), "Extended");
        assert_eq!(difficulty_label(20), "Epic");
    }
}
