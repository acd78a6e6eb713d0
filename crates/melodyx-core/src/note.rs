//! Chromatic note symbols.
//!
//! Every melody and guess in Melodyx is an ordered sequence of notes drawn
//! from the 12-symbol chromatic scale (`C` through `B` with sharps). Notes
//! compare by exact symbol equality; there is no enharmonic or octave
//! equivalence (`C#` and `Db` are different symbols and only `C#` is valid).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of symbols in the chromatic scale.
pub const NOTE_COUNT: usize = 12;

/// A single chromatic note symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

impl Note {
    /// All 12 notes in chromatic order.
    pub const ALL: [Note; NOTE_COUNT] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Returns the note as its display symbol (e.g., `"C#"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Note {
    type Err = NoteError;

    /// Parses an exact note symbol. Matching is case-sensitive: `"c"` and
    /// `"Db"` are rejected, only the 12 canonical spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Note::C),
            "C#" => Ok(Note::CSharp),
            "D" => Ok(Note::D),
            "D#" => Ok(Note::DSharp),
            "E" => Ok(Note::E),
            "F" => Ok(Note::F),
            "F#" => Ok(Note::FSharp),
            "G" => Ok(Note::G),
            "G#" => Ok(Note::GSharp),
            "A" => Ok(Note::A),
            "A#" => Ok(Note::ASharp),
            "B" => Ok(Note::B),
            _ => Err(NoteError::Unknown(s.to_string())),
        }
    }
}

/// Error type for note parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The string is not one of the 12 valid note symbols.
    #[error("unknown note symbol: '{0}'")]
    Unknown(String),
}

/// Parses a sequence of note symbols, failing on the first invalid one.
///
/// # Example
/// ```
/// use melodyx_core::note::{parse_notes, Note};
///
/// let notes = parse_notes(&["C", "E", "G"]).unwrap();
/// assert_eq!(notes, vec![Note::C, Note::E, Note::G]);
/// assert!(parse_notes(&["C", "H"]).is_err());
/// ```
pub fn parse_notes<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<Note>, NoteError> {
    symbols.iter().map(|s| s.as_ref().parse()).collect()
}
