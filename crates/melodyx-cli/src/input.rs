//! Input parsing for the CLI boundary.
//!
//! Users type note lists as `"C,D,E"` or `"C D E"` and dates as
//! `YYYY-MM-DD`; everything is normalized here before it reaches the core.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use melodyx_core::note::Note;

/// Parses a comma- or whitespace-separated note list.
///
/// Symbols must be the exact chromatic spellings the core accepts
/// (`C`, `C#`, ... `B`); anything else is an error naming the offender.
pub fn parse_note_list(input: &str) -> Result<Vec<Note>> {
    let symbols: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if symbols.is_empty() {
        bail!("no notes given (expected e.g. \"C,D,E\")");
    }
    symbols
        .iter()
        .map(|s| {
            s.parse::<Note>()
                .with_context(|| format!("invalid note '{}' (valid: C C# D D# E F F# G G# A A# B)", s))
        })
        .collect()
}

/// Parses a `YYYY-MM-DD` date, defaulting to the local calendar day.
pub fn parse_date(input: Option<&str>) -> Result<NaiveDate> {
    match input {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}' (expected YYYY-MM-DD)", s)),
        None => Ok(Local::now().date_naive()),
    }
}
