//! Error handling for genproj.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating project files.
///
/// Configuration errors abort the run before anything is written.
/// Rendering and write errors abort the run as well, but a document
/// written before the failure is left in place.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Root directory '{root}' does not exist.")]
    RootNotFound { root: String },

    #[error("Root '{root}' is not a directory.")]
    RootNotADirectory { root: String },

    /// A discovered path does not start with the configured root.
    #[error("Path '{path}' is not located under root '{root}'.")]
    PathOutsideRoot { path: String, root: String },

    #[error("Invalid pattern '{pattern}': {source}.")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Represents errors that occur during configuration processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to build template context: {0}.")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
