//! Message helpers for the error stream.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prompt shown before every human decision, listing what is legal right now.
pub fn action_prompt(available: &[&str]) -> String {
    format!("Your action ({}, q to quit): ", available.join("/"))
}
