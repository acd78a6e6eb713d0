//! Melodyx CLI library.
//!
//! This crate provides the command implementations behind the `melodyx`
//! binary: inspecting the daily puzzle, scoring guesses, validating
//! composer note sequences, and an interactive terminal round.

pub mod commands;
pub mod input;
