//! Error type for the CLI commands.
//!
//! Every variant maps to exit code 2; see [`crate::exit_code`].

use std::fmt;

use showdown_ai::FactoryError;
use showdown_engine::errors::{AgentError, EngineError};

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error writing output or reading input
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The session or evaluator failed
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<AgentError> for CliError {
    fn from(error: AgentError) -> Self {
        CliError::Engine(error.to_string())
    }
}

// unknown model names come from the user
impl From<FactoryError> for CliError {
    fn from(error: FactoryError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let err: CliError = EngineError::NotEnoughSeats(1).into();
        assert!(matches!(err, CliError::Engine(_)));
        assert!(err.to_string().starts_with("Engine error: "));
    }

    #[test]
    fn unknown_model_is_invalid_input() {
        let err: CliError = FactoryError::UnknownModel("gpt".into()).into();
        assert!(matches!(err, CliError::InvalidInput(ref m) if m.contains("gpt")));
    }

    #[test]
    fn io_errors_expose_their_source() {
        use std::error::Error;
        let err: CliError = std::io::Error::other("closed").into();
        assert!(err.source().is_some());
    }
}
