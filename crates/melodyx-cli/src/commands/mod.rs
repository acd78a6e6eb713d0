//! CLI command implementations

pub mod play;
pub mod score;
pub mod today;
pub mod validate;

mod json_output;
