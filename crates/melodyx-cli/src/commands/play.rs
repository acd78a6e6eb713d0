//! Play command implementation
//!
//! An interactive terminal round of the daily puzzle: read guesses from
//! stdin, render feedback rows, and print the share text when the round
//! ends.

use anyhow::Result;
use colored::Colorize;
use melodyx_core::daily::puzzle_number_for_date;
use melodyx_core::feedback::{get_feedback, is_win, GuessResult};
use melodyx_core::melody::{Melody, MelodyCatalog};
use melodyx_core::share::{generate_share_text, max_guesses_for_length};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use super::score::render_row;
use crate::input::{parse_date, parse_note_list};

/// Run the play command
///
/// # Arguments
/// * `date` - Optional `YYYY-MM-DD` override; defaults to the local day
/// * `themed` - Use the themed selector instead of the plain one
pub fn run(date: Option<&str>, themed: bool) -> Result<ExitCode> {
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

    println!("{} #{}", "Melodyx".cyan().bold(), puzzle_number);
    if let Some(theme) = theme {
        println!("{} {}", "Theme:".dimmed(), theme);
    }
    println!("{} {}", "Hint:".dimmed(), melody.hint);
    println!(
        "Guess the {}-note melody. {} attempts. Notes: C C# D D# E F F# G G# A A# B",
        melody.notes.len(),
        max_guesses
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut history: Vec<Vec<GuessResult>> = Vec::new();
    let mut won = false;

    while (history.len() as u32) < max_guesses && !won {
        print!(
            "{} ",
            format!("[{}/{}]>", history.len() + 1, max_guesses).bold()
        );
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // stdin closed; end the round
        };
        if line.trim().is_empty() {
            continue;
        }

        let guess = match parse_note_list(&line) {
            Ok(guess) => guess,
            Err(err) => {
                println!("  {} {:#}", "!".yellow(), err);
                continue;
            }
        };
        if guess.len() != melody.notes.len() {
            println!(
                "  {} need exactly {} notes, got {}",
                "!".yellow(),
                melody.notes.len(),
                guess.len()
            );
            continue;
        }

        let feedback = get_feedback(&guess, &melody.notes);
        println!("  {}", render_row(&feedback));
        won = is_win(&feedback);
        history.push(feedback);
    }

    println!();
    if won {
        println!(
            "{} {} in {}/{}",
            "Solved:".green().bold(),
            melody.name,
            history.len(),
            max_guesses
        );
    } else {
        println!("{} it was {}", "Out of guesses:".red().bold(), melody.name);
        let answer: Vec<String> = melody.notes.iter().map(|n| n.to_string()).collect();
        println!("{} {}", "Notes:".dimmed(), answer.join(" "));
    }

    println!();
    println!(
        "{}",
        generate_share_text(
            &history,
            puzzle_number,
            won,
            melody.notes.len(),
            None,
            Some(max_guesses),
        )
    );

    Ok(ExitCode::SUCCESS)
}
