//! CLI error types.

use std::fmt;

use sightline::FetchError;

/// Errors that can occur while running a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// Invalid argument combination or configuration.
    Config(String),

    /// Failed to create the Tokio runtime or HTTP client.
    Runtime(String),

    /// The fetch pipeline failed.
    Fetch(FetchError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "configuration error: {}", msg),
            CliError::Runtime(msg) => write!(f, "runtime error: {}", msg),
            CliError::Fetch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Fetch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Fetch(e)
    }
}
