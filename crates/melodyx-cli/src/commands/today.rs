//! Today command implementation
//!
//! Shows the daily puzzle for a date without spoiling the answer, unless
//! `--reveal` is passed.

use anyhow::Result;
use colored::Colorize;
use melodyx_core::daily::puzzle_number_for_date;
use melodyx_core::melody::{Melody, MelodyCatalog};
use melodyx_core::share::max_guesses_for_length;
use std::process::ExitCode;

use super::json_output::TodayOutput;
use crate::input::parse_date;

/// Run the today command
///
/// # Arguments
/// * `date` - Optional `YYYY-MM-DD` override; defaults to the local day
/// * `themed` - Use the themed selector instead of the plain one
/// * `reveal` - Print the answer (name and notes)
/// * `json` - Emit machine-readable JSON instead of colored text
pub fn run(date: Option<&str>, themed: bool, reveal: bool, json: bool) -> Result<ExitCode> {
    let date = parse_date(date)?;
    let catalog = MelodyCatalog::builtin();

    let (melody, theme): (&Melody, Option<&str>) = if themed {
        let pick = catalog.themed_melody_for_date(date);
        (pick.melody, Some(pick.theme.name))
    } else {
        (catalog.melody_for_date(date), None)
    };

    let puzzle_number = puzzle_number_for_date(date);
    let max_guesses = max_guesses_for_length(melody.notes.len());

    if json {
        let output = TodayOutput::new(date, puzzle_number, max_guesses, melody, theme, reveal);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} #{} ({})",
        "Melodyx".cyan().bold(),
        puzzle_number,
        date.format("%Y-%m-%d")
    );
    if let Some(theme) = theme {
        println!("{} {}", "Theme:".dimmed(), theme);
    }
    println!(
        "{} {} notes, {} guesses",
        "Puzzle:".dimmed(),
        melody.notes.len(),
        max_guesses
    );
    println!("{} {}", "Hint:".dimmed(), melody.hint);
    println!(
        "{} {} / {} / {}",
        "Style:".dimmed(),
        melody.genre,
        melody.era,
        melody.mood
    );
    if let (Some(country), Some(flag)) = (&melody.country, &melody.flag) {
        println!("{} {} {}", "Origin:".dimmed(), flag, country);
    }

    if reveal {
        let notes: Vec<String> = melody.notes.iter().map(|n| n.to_string()).collect();
        println!();
        println!("{} {}", "Answer:".yellow().bold(), melody.name);
        println!("{} {}", "Notes:".yellow(), notes.join(" "));
        if let Some(artist) = &melody.artist {
            println!("{} {}", "By:".yellow(), artist);
        }
    }

    Ok(ExitCode::SUCCESS)
}
