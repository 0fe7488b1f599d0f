//! Error types for the CLI application.

use std::fmt;

use holdem_ai::UnknownAi;
use holdem_engine::errors::EngineError;

use crate::config::ConfigError;
use crate::exit_code;

/// Everything a command handler can fail with, propagated with `?`.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdin, stdout/stderr writes, history file)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    Config(String),

    Engine(EngineError),

    /// The input stream closed mid-session
    Interrupted(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Interrupted(_) => exit_code::INTERRUPTED,
            _ => exit_code::ERROR,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<UnknownAi> for CliError {
    fn from(error: UnknownAi) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::Interrupted("eof".into()).exit_code(), 130);
        assert_eq!(CliError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(CliError::from(EngineError::DeckExhausted).exit_code(), 2);
    }

    #[test]
    fn display_names_the_kind() {
        let e = CliError::from(UnknownAi("oracle".into()));
        assert!(e.to_string().starts_with("Invalid input: "));
        assert!(e.to_string().contains("oracle"));
    }
}
