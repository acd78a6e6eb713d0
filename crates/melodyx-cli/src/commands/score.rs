//! Score command implementation
//!
//! Scores one guess against a target sequence and prints the per-note
//! feedback row.

use anyhow::Result;
use colored::Colorize;
use melodyx_core::feedback::{get_feedback, is_win, Feedback, GuessResult};
use std::process::ExitCode;

use super::json_output::ScoreOutput;
use crate::input::parse_note_list;

/// Run the score command
///
/// # Arguments
/// * `guess` - The guessed note list, e.g. `"C,E,D"`
/// * `target` - The target note list
/// * `json` - Emit machine-readable JSON instead of colored text
pub fn run(guess: &str, target: &str, json: bool) -> Result<ExitCode> {
    let guess = parse_note_list(guess)?;
    let target = parse_note_list(target)?;

    let feedback = get_feedback(&guess, &target);
    let win = is_win(&feedback);

    if json {
        let output = ScoreOutput { feedback, win };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", render_row(&feedback));
    if win {
        println!("{}", "Solved!".green().bold());
    } else {
        let correct = feedback
            .iter()
            .filter(|r| r.feedback == Feedback::Correct)
            .count();
        let present = feedback
            .iter()
            .filter(|r| r.feedback == Feedback::Present)
            .count();
        println!(
            "{} correct, {} misplaced out of {}",
            correct,
            present,
            feedback.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Renders one scored guess as a colored terminal row.
pub(crate) fn render_row(feedback: &[GuessResult]) -> String {
    feedback
        .iter()
        .map(|r| {
            let cell = format!(" {:<2}", r.note.as_str());
            match r.feedback {
                Feedback::Correct => cell.on_green().black().to_string(),
                Feedback::Present => cell.on_yellow().black().to_string(),
                Feedback::Absent => cell.dimmed().to_string(),
                Feedback::Empty => cell.normal().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
