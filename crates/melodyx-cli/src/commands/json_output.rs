//! Machine-readable output types for the `--json` flag.
//!
//! Shapes are stable; scripts depend on them.

use melodyx_core::feedback::GuessResult;
use melodyx_core::melody::Melody;
use melodyx_core::validation::MelodyValidation;
use serde::Serialize;

/// Output of the `today` command.
#[derive(Debug, Serialize)]
pub struct TodayOutput {
    /// The date the puzzle belongs to, `YYYY-MM-DD`.
    pub date: String,
    /// Sequential puzzle number since the epoch.
    pub puzzle_number: u32,
    /// Puzzle length in notes.
    pub melody_length: usize,
    /// Allowed attempts for this length.
    pub max_guesses: u32,
    /// Hint shown to the player.
    pub hint: String,
    /// Classification metadata.
    pub category: String,
    pub genre: String,
    pub era: String,
    pub mood: String,
    /// Theme name, present for themed selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// The answer, present only with `--reveal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl TodayOutput {
    /// Builds the output for a selected melody, withholding the answer
    /// unless `reveal` is set.
    pub fn new(
        date: chrono::NaiveDate,
        puzzle_number: u32,
        max_guesses: u32,
        melody: &Melody,
        theme: Option<&str>,
        reveal: bool,
    ) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            puzzle_number,
            melody_length: melody.notes.len(),
            max_guesses,
            hint: melody.hint.clone(),
            category: melody.category.clone(),
            genre: melody.genre.clone(),
            era: melody.era.clone(),
            mood: melody.mood.clone(),
            theme: theme.map(String::from),
            name: reveal.then(|| melody.name.clone()),
            notes: reveal
                .then(|| melody.notes.iter().map(|n| n.to_string()).collect()),
        }
    }
}

/// Output of the `score` command.
#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    /// Per-position feedback, in guess order.
    pub feedback: Vec<GuessResult>,
    /// Whether every position is correct.
    pub win: bool,
}

/// Output of the `validate` command.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub is_valid: bool,
    pub errors: Vec<JsonIssue>,
    pub warnings: Vec<JsonIssue>,
    pub complexity: String,
}

/// One validation error or warning.
#[derive(Debug, Serialize)]
pub struct JsonIssue {
    /// Code such as `E001` or `W002`.
    pub code: String,
    pub message: String,
}

impl From<&MelodyValidation> for ValidateOutput {
    fn from(validation: &MelodyValidation) -> Self {
        Self {
            is_valid: validation.is_valid,
            errors: validation
                .errors
                .iter()
                .map(|e| JsonIssue {
                    code: e.code.to_string(),
                    message: e.message.clone(),
                })
                .collect(),
            warnings: validation
                .warnings
                .iter()
                .map(|w| JsonIssue {
                    code: w.code.to_string(),
                    message: w.message.clone(),
                })
                .collect(),
            complexity: validation.complexity.to_string(),
        }
    }
}
