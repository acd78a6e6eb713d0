//! Melody catalog types.
//!
//! A [`Melody`] is an immutable catalog entry: the puzzle-solvable note
//! prefix, a longer snippet for playback hints, and classification metadata
//! used for theming. The [`MelodyCatalog`] is an order-significant,
//! validated list of melodies; order matters because the daily selector
//! indexes into it.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::note::Note;

/// Minimum puzzle length for a catalog melody.
pub const MIN_MELODY_NOTES: usize = 3;

/// One puzzle entry. Defined at build time, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Melody {
    /// Unique display name.
    pub name: String,
    /// The puzzle-solvable note prefix (length >= 3).
    pub notes: Vec<Note>,
    /// Longer snippet for playback/hints; its prefix corresponds to `notes`.
    pub extended_notes: Vec<Note>,
    /// Hint text shown to the player.
    pub hint: String,
    /// Free-form classification, used for theming.
    pub category: String,
    /// Free-form genre label.
    pub genre: String,
    /// Free-form era label.
    pub era: String,
    /// Free-form mood label.
    pub mood: String,
    /// Country of origin, if meaningful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Flag emoji for the country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    /// Composer or performing artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl Melody {
    /// Length of the puzzle prefix.
    pub fn puzzle_len(&self) -> usize {
        self.notes.len()
    }
}

/// Errors raised when constructing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no entries. Selection over an empty catalog would
    /// index out of bounds, so this is rejected up front.
    #[error("melody catalog is empty")]
    Empty,

    /// Two entries share a name.
    #[error("duplicate melody name: '{0}'")]
    DuplicateName(String),

    /// An entry violates a data invariant.
    #[error("invalid melody '{name}': {reason}")]
    InvalidMelody {
        /// Name of the offending entry.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A validated, order-significant, immutable list of melodies.
///
/// Construction enforces the catalog invariants (non-empty, unique names,
/// per-entry integrity), so the selectors can index without defensive
/// checks.
#[derive(Debug, Clone)]
pub struct MelodyCatalog {
    melodies: Vec<Melody>,
}

impl MelodyCatalog {
    /// Builds a catalog from a list of melodies, enforcing all invariants.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if the list is empty, a name repeats, or an
    /// entry is malformed (empty name/hint/classification, fewer than 3
    /// notes, or `extended_notes` shorter than `notes`).
    pub fn new(melodies: Vec<Melody>) -> Result<Self, CatalogError> {
        if melodies.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for melody in &melodies {
            if !seen.insert(melody.name.as_str()) {
                return Err(CatalogError::DuplicateName(melody.name.clone()));
            }
            check_melody(melody)?;
        }

        Ok(Self { melodies })
    }

    /// Parses a catalog from a JSON array of melodies (content packs).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let melodies: Vec<Melody> = serde_json::from_str(json)?;
        Self::new(melodies)
    }

    /// Returns the built-in catalog bundled with the crate.
    ///
    /// Parsed once on first use; the embedded data is covered by tests, so
    /// a parse failure here is a build defect.
    pub fn builtin() -> &'static MelodyCatalog {
        static BUILTIN: OnceLock<MelodyCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            MelodyCatalog::from_json(include_str!("../data/catalog.json"))
                .expect("embedded catalog is valid")
        })
    }

    /// Number of melodies.
    pub fn len(&self) -> usize {
        self.melodies.len()
    }

    /// Always false for a constructed catalog; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.melodies.is_empty()
    }

    /// Returns the melody at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Melody> {
        self.melodies.get(index)
    }

    /// Iterates over the melodies in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Melody> {
        self.melodies.iter()
    }

    /// Looks up a melody by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Melody> {
        self.melodies.iter().find(|m| m.name == name)
    }
}

fn check_melody(melody: &Melody) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidMelody {
        name: melody.name.clone(),
        reason: reason.to_string(),
    };

    if melody.name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if melody.notes.len() < MIN_MELODY_NOTES {
        return Err(invalid("fewer than 3 notes"));
    }
    if melody.extended_notes.len() < melody.notes.len() {
        return Err(invalid("extended_notes shorter than notes"));
    }
    if melody.hint.trim().is_empty() {
        return Err(invalid("hint is empty"));
    }
    for (field, value) in [
        ("category", &melody.category),
        ("genre", &melody.genre),
        ("era", &melody.era),
        ("mood", &melody.mood),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(&format!("{} is empty", field)));
        }
    }
    Ok(())
}
