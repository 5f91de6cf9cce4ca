//! Error types for the custom command dispatcher.

use thiserror::Error;

/// Result type alias using the crate Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Custom command dispatcher error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host has no pre-declared command trigger with this name.
    #[error("Command trigger '{0}' was never declared to the host")]
    UndeclaredTrigger(String),

    /// External placeholder-expansion integration error.
    #[error("Placeholder expansion error: {0}")]
    Expansion(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
