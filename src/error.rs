//! Top-level error types.
//!
//! Wraps CLI argument errors and packaging stage errors behind one type
//! so `main` has a single failure path.

use thiserror::Error;

/// Result type alias for top-level operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for the raypack binary
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Packaging pipeline errors
    #[error("{0}")]
    Packager(#[from] crate::packager::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
