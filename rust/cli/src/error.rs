//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.
//!
//! ## Batch Errors
//!
//! The `BatchValidationError<T>` type records a failure for one item of a
//! batch (one log file of a directory import) without aborting the rest.

use std::fmt;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Parser construction error (e.g. an unusable hero name)
    Engine(String),

    /// Hand database error
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Storage(msg) => write!(f, "Storage error: {}", msg),
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

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<actiontrack_engine::ParserError> for CliError {
    fn from(error: actiontrack_engine::ParserError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<rusqlite::Error> for CliError {
    fn from(error: rusqlite::Error) -> Self {
        CliError::Storage(error.to_string())
    }
}

/// Error for one item of a batch operation.
///
/// Each error tracks the item that failed and a descriptive error message.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g. `String` for a file
///   path). Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use actiontrack_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "logs/day1.txt".to_string(),
///     message: "stream did not contain valid UTF-8".to_string(),
/// };
/// assert_eq!(error.to_string(), "logs/day1.txt: stream did not contain valid UTF-8");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
