//! Melody note validation.
//!
//! Checks a user-submitted note sequence (e.g., from the composer screen)
//! against the chromatic note set and length bounds, and derives soft
//! quality advisories plus a complexity classification. All checks run
//! independently; nothing short-circuits. Warnings never block validity.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::note::Note;

/// Error codes for melody validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: One or more symbols are not valid chromatic notes.
    InvalidNotes,
    /// E002: Fewer notes than the minimum allowed.
    TooFewNotes,
    /// E003: More notes than the maximum allowed.
    TooManyNotes,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidNotes => "E001",
            ErrorCode::TooFewNotes => "E002",
            ErrorCode::TooManyNotes => "E003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for melody validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Fewer than 3 distinct notes in a sequence long enough to vary.
    LowVariety,
    /// W002: More than 3 consecutive identical notes.
    RepeatedRun,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::LowVariety => "W001",
            WarningCode::RepeatedRun => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A hard validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A soft advisory that never blocks validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Heuristic difficulty classification of a note sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    /// Returns the complexity as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of validating a melody note sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MelodyValidation {
    /// True iff there are no errors. Warnings do not affect this.
    pub is_valid: bool,
    /// Hard failures that should block submission.
    pub errors: Vec<ValidationError>,
    /// Soft advisories the caller may surface.
    pub warnings: Vec<ValidationWarning>,
    /// Heuristic difficulty classification.
    pub complexity: Complexity,
}

/// Minimum sequence length before low variety is worth warning about.
const VARIETY_LENGTH_THRESHOLD: usize = 5;

/// Longest allowed run of one note before the repetition warning fires.
const MAX_IDENTICAL_RUN: usize = 3;

/// Validates a melody note sequence against the chromatic note set and the
/// given length bounds.
///
/// All checks run; errors and warnings accumulate independently:
///
/// - symbols outside the 12-note set are an error listing the offenders;
/// - a length below `min_notes` or above `max_notes` is an error (each
///   bound reported separately);
/// - fewer than 3 distinct notes in a sequence of 5 or more is a warning;
/// - a run of more than 3 consecutive identical notes is a warning.
///
/// # Example
/// ```
/// use melodyx_core::validation::validate_melody_notes;
///
/// let result = validate_melody_notes(&["C", "E", "G", "C"], 3, 12);
/// assert!(result.is_valid);
/// assert!(result.errors.is_empty());
/// ```
pub fn validate_melody_notes<S: AsRef<str>>(
    notes: &[S],
    min_notes: usize,
    max_notes: usize,
) -> MelodyValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let invalid: Vec<&str> = notes
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| s.parse::<Note>().is_err())
        .collect();
    if !invalid.is_empty() {
        errors.push(ValidationError::new(
            ErrorCode::InvalidNotes,
            format!("invalid notes: {}", invalid.join(", ")),
        ));
    }

    if notes.len() < min_notes {
        errors.push(ValidationError::new(
            ErrorCode::TooFewNotes,
            format!("melody must have at least {} notes, got {}", min_notes, notes.len()),
        ));
    }
    if notes.len() > max_notes {
        errors.push(ValidationError::new(
            ErrorCode::TooManyNotes,
            format!("melody must have at most {} notes, got {}", max_notes, notes.len()),
        ));
    }

    let unique = unique_count(notes);
    if notes.len() >= VARIETY_LENGTH_THRESHOLD && unique < 3 {
        warnings.push(ValidationWarning::new(
            WarningCode::LowVariety,
            format!("only {} distinct notes; melodies play better with more variety", unique),
        ));
    }

    if let Some(run) = longest_run(notes) {
        if run > MAX_IDENTICAL_RUN {
            warnings.push(ValidationWarning::new(
                WarningCode::RepeatedRun,
                format!("{} identical notes in a row", run),
            ));
        }
    }

    MelodyValidation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        complexity: classify_complexity(unique, notes.len()),
    }
}

/// Number of distinct symbols in the sequence.
fn unique_count<S: AsRef<str>>(notes: &[S]) -> usize {
    notes.iter().map(|s| s.as_ref()).collect::<HashSet<_>>().len()
}

/// Length of the longest run of consecutive identical symbols, if any.
fn longest_run<S: AsRef<str>>(notes: &[S]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut current = 0usize;
    let mut previous: Option<&str> = None;
    for note in notes.iter().map(|s| s.as_ref()) {
        if previous == Some(note) {
            current += 1;
        } else {
            current = 1;
            previous = Some(note);
        }
        best = Some(best.map_or(current, |b| b.max(current)));
    }
    best
}

/// Classifies difficulty from distinct-note count and total length.
///
/// The simple and complex conditions can overlap; the simple branch takes
/// precedence.
fn classify_complexity(unique: usize, len: usize) -> Complexity {
    if unique <= 3 || len <= 5 {
        Complexity::Simple
    } else if unique >= 6 || len >= 7 {
        Complexity::Complex
    } else {
        Complexity::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn error_codes(v: &MelodyValidation) -> Vec<ErrorCode> {
        v.errors.iter().map(|e| e.code).collect()
    }

    fn warning_codes(v: &MelodyValidation) -> Vec<WarningCode> {
        v.warnings.iter().map(|w| w.code).collect()
    }

    #[test]
    fn valid_melody_passes() {
        let result = validate_melody_notes(&["C", "D", "E", "F", "G", "A"], 3, 12);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn invalid_symbols_are_listed() {
        let result = validate_melody_notes(&["C", "H", "Db", "E"], 3, 12);
        assert!(!result.is_valid);
        assert_eq!(error_codes(&result), vec![ErrorCode::InvalidNotes]);
        assert!(result.errors[0].message.contains("H"));
        assert!(result.errors[0].message.contains("Db"));
        assert!(!result.errors[0].message.contains("E,"));
    }

    #[test]
    fn length_bounds_are_separate_errors() {
        let short = validate_melody_notes(&["C", "D"], 3, 12);
        assert_eq!(error_codes(&short), vec![ErrorCode::TooFewNotes]);

        let symbols: Vec<&str> = std::iter::repeat("C").take(13).collect();
        let long = validate_melody_notes(&symbols, 3, 12);
        assert!(long.errors.iter().any(|e| e.code == ErrorCode::TooManyNotes));
    }

    #[test]
    fn checks_do_not_short_circuit() {
        // Invalid symbol AND too short: both errors reported.
        let result = validate_melody_notes(&["C", "X"], 3, 12);
        assert_eq!(
            error_codes(&result),
            vec![ErrorCode::InvalidNotes, ErrorCode::TooFewNotes]
        );
    }

    #[test]
    fn low_variety_warns_only_on_longer_sequences() {
        let short = validate_melody_notes(&["C", "D", "C", "D"], 3, 12);
        assert!(short.warnings.is_empty());

        let long = validate_melody_notes(&["C", "D", "C", "D", "C"], 3, 12);
        assert_eq!(warning_codes(&long), vec![WarningCode::LowVariety]);
        assert!(long.is_valid, "warnings must not block validity");
    }

    #[test]
    fn repeated_run_warns_past_three() {
        let three = validate_melody_notes(&["C", "C", "C", "D", "E", "F"], 3, 12);
        assert!(!three.warnings.iter().any(|w| w.code == WarningCode::RepeatedRun));

        let four = validate_melody_notes(&["C", "C", "C", "C", "D", "E", "F"], 3, 12);
        assert!(four.warnings.iter().any(|w| w.code == WarningCode::RepeatedRun));
    }

    #[test]
    fn complexity_simple_takes_precedence() {
        // len <= 5 forces simple even with high variety.
        assert_eq!(classify_complexity(5, 5), Complexity::Simple);
        // unique <= 3 forces simple even for long sequences.
        assert_eq!(classify_complexity(3, 20), Complexity::Simple);
    }

    #[test]
    fn complexity_complex_and_moderate() {
        assert_eq!(classify_complexity(6, 6), Complexity::Complex);
        assert_eq!(classify_complexity(4, 8), Complexity::Complex);
        assert_eq!(classify_complexity(4, 6), Complexity::Moderate);
        assert_eq!(classify_complexity(5, 6), Complexity::Moderate);
    }

    #[test]
    fn empty_input_is_only_a_length_error() {
        let result = validate_melody_notes::<&str>(&[], 3, 12);
        assert_eq!(error_codes(&result), vec![ErrorCode::TooFewNotes]);
        assert_eq!(result.complexity, Complexity::Simple);
    }
}
