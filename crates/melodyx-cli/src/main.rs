//! Melodyx CLI - Daily melody guessing from the terminal
//!
//! This binary provides commands for playing the daily puzzle, scoring
//! guesses, validating composed melodies, and inspecting the selection.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use melodyx_cli::commands;

/// Melodyx - Daily Melody Guessing Game
#[derive(Parser)]
#[command(name = "melodyx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the daily puzzle without spoiling the answer
    Today {
        /// Date to inspect (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Use the themed selector instead of the plain daily pick
        #[arg(long)]
        themed: bool,

        /// Reveal the answer (name and notes)
        #[arg(long)]
        reveal: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Score one guess against a target note sequence
    Score {
        /// The guessed notes, e.g. "C,E,D"
        #[arg(short, long)]
        guess: String,

        /// The target notes, e.g. "C,D,E"
        #[arg(short, long)]
        target: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a composed note sequence
    Validate {
        /// The notes to validate, e.g. "C,D,E"
        #[arg(short, long)]
        notes: String,

        /// Minimum allowed melody length
        #[arg(long, default_value_t = 3)]
        min: usize,

        /// Maximum allowed melody length
        #[arg(long, default_value_t = 32)]
        max: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Play the daily puzzle interactively
    Play {
        /// Date to play (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Use the themed selector instead of the plain daily pick
        #[arg(long)]
        themed: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Today {
            date,
            themed,
            reveal,
            json,
        } => commands::today::run(date.as_deref(), themed, reveal, json),
        Commands::Score {
            guess,
            target,
            json,
        } => commands::score::run(&guess, &target, json),
        Commands::Validate {
            notes,
            min,
            max,
            json,
        } => commands::validate::run(&notes, min, max, json),
        Commands::Play { date, themed } => commands::play::run(date.as_deref(), themed),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
