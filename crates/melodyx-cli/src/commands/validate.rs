//! Validate command implementation
//!
//! Runs composer-side validation over a note sequence and reports errors,
//! warnings, and the complexity classification.

use anyhow::Result;
use colored::Colorize;
use melodyx_core::validation::validate_melody_notes;
use std::process::ExitCode;

use super::json_output::ValidateOutput;

/// Run the validate command
///
/// # Arguments
/// * `notes` - The note list to validate, e.g. `"C,D,E"`
/// * `min_notes` - Minimum allowed length
/// * `max_notes` - Maximum allowed length
/// * `json` - Emit machine-readable JSON instead of colored text
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(notes: &str, min_notes: usize, max_notes: usize, json: bool) -> Result<ExitCode> {
    let symbols: Vec<&str> = notes
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let validation = validate_melody_notes(&symbols, min_notes, max_notes);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ValidateOutput::from(&validation))?
        );
        return Ok(if validation.is_valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    println!(
        "{} {} notes, complexity {}",
        "Validating:".cyan().bold(),
        symbols.len(),
        validation.complexity
    );

    for error in &validation.errors {
        println!("  {} [{}] {}", "✗".red(), error.code, error.message);
    }
    for warning in &validation.warnings {
        println!("  {} [{}] {}", "!".yellow(), warning.code, warning.message);
    }

    if validation.is_valid {
        println!("{}", "Valid melody".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{}",
            format!("Invalid melody ({} error(s))", validation.errors.len())
                .red()
                .bold()
        );
        Ok(ExitCode::from(1))
    }
}
