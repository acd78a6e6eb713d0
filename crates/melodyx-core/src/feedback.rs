//! Guess scoring.
//!
//! Compares a guess sequence against the target melody and classifies each
//! position as correct, present, or absent. Duplicate notes are handled with
//! multiset semantics: each target note can satisfy at most one guess
//! position, and exact positional matches are consumed before displaced
//! matches are considered.

use serde::{Deserialize, Serialize};

use crate::note::Note;

/// Per-position classification of a guess note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Right note in the right position.
    Correct,
    /// Note occurs in the target, but at a different position.
    Present,
    /// Note does not occur in the (remaining) target.
    Absent,
    /// Unfilled slot; used by UI rows, never produced by the scorer.
    Empty,
}

impl Feedback {
    /// Returns the feedback as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Correct => "correct",
            Feedback::Present => "present",
            Feedback::Absent => "absent",
            Feedback::Empty => "empty",
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scored guess position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    /// The guessed note.
    pub note: Note,
    /// The classification for this position.
    pub feedback: Feedback,
}

impl GuessResult {
    /// Creates a new guess result.
    pub fn new(note: Note, feedback: Feedback) -> Self {
        Self { note, feedback }
    }
}

/// Scores a guess against a target melody.
///
/// Two passes over the guess, Wordle-style:
///
/// 1. Exact matches: `guess[i] == target[i]` is marked [`Feedback::Correct`]
///    and that target position is consumed.
/// 2. Displaced matches: every remaining guess note scans the unconsumed
///    target positions in ascending order; a hit is marked
///    [`Feedback::Present`] and consumes the matched position.
///
/// Pass 1 runs to completion before pass 2 starts; this ordering is what
/// makes duplicate handling correct. Any position with no match left is
/// [`Feedback::Absent`].
///
/// The result has one entry per guess note, in guess order. The function is
/// total: mismatched lengths are fine (iteration is bounded by the guess),
/// and empty inputs yield an empty result.
///
/// # Example
/// ```
/// use melodyx_core::feedback::{get_feedback, Feedback};
/// use melodyx_core::note::Note;
///
/// let guess = [Note::C, Note::C, Note::E];
/// let target = [Note::C, Note::E, Note::G];
/// let scored = get_feedback(&guess, &target);
///
/// assert_eq!(scored[0].feedback, Feedback::Correct);
/// assert_eq!(scored[1].feedback, Feedback::Absent); // the only C is consumed
/// assert_eq!(scored[2].feedback, Feedback::Present);
/// ```
pub fn get_feedback(guess: &[Note], target: &[Note]) -> Vec<GuessResult> {
    let mut results: Vec<GuessResult> = guess
        .iter()
        .map(|&note| GuessResult::new(note, Feedback::Absent))
        .collect();
    let mut consumed = vec![false; target.len()];

    // Pass 1: exact positional matches.
    for (i, &note) in guess.iter().enumerate() {
        if target.get(i) == Some(&note) {
            results[i].feedback = Feedback::Correct;
            consumed[i] = true;
        }
    }

    // Pass 2: displaced matches against the unconsumed remainder.
    for (i, &note) in guess.iter().enumerate() {
        if results[i].feedback == Feedback::Correct {
            continue;
        }
        let hit = target
            .iter()
            .enumerate()
            .find(|&(j, &t)| !consumed[j] && t == note);
        if let Some((j, _)) = hit {
            results[i].feedback = Feedback::Present;
            consumed[j] = true;
        }
    }

    results
}

/// Returns true iff every position is [`Feedback::Correct`].
///
/// Vacuously true for an empty slice.
pub fn is_win(feedback: &[GuessResult]) -> bool {
    feedback.iter().all(|r| r.feedback == Feedback::Correct)
}
