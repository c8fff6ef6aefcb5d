//! Error handling module for the plox CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application, and the sysexits-style exit
//! codes each error maps to.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for a command-line usage error.
pub const EX_USAGE: u8 = 64;

/// Exit code for malformed input data (lexical errors, or a script that is
/// not UTF-8).
pub const EX_DATAERR: u8 = 65;

/// Exit code for an input file that cannot be opened.
pub const EX_NOINPUT: u8 = 66;

/// Exit code for an I/O failure on the terminal or output streams.
pub const EX_IOERR: u8 = 74;

/// Exit code for a bad configuration file.
pub const EX_CONFIG: u8 = 78;

/// Main error type for the plox CLI application.
#[derive(Error, Debug)]
pub enum PloxError {
    /// Too many positional arguments.
    #[error("Usage: plox [script]")]
    Usage,

    /// Error when the configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the script file cannot be read.
    #[error("Could not read '{}': {source}", .path.display())]
    NoInput {
        /// The script path as given.
        path: PathBuf,
        /// Underlying read failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when the script was read but is not valid UTF-8.
    #[error("Could not read '{}': not valid UTF-8", .path.display())]
    InvalidEncoding {
        /// The script path as given.
        path: PathBuf,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PloxError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            PloxError::Usage => EX_USAGE,
            PloxError::Config(_) => EX_CONFIG,
            PloxError::NoInput { .. } => EX_NOINPUT,
            PloxError::InvalidEncoding { .. } => EX_DATAERR,
            PloxError::Io(_) | PloxError::Json(_) => EX_IOERR,
        }
    }
}

/// Result type alias using PloxError.
pub type Result<T> = std::result::Result<T, PloxError>;
