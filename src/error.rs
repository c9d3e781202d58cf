//! Error handling for the renamer.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for renamer operations.
///
/// Every variant is fatal for the run: errors propagate up to `main`,
/// which reports them and exits. Files that are merely absent are not
/// errors and never show up here.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project information file is missing, unreadable or malformed
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A required key is absent from the project information file
    #[error("Configuration error: missing required key '{key}'.")]
    MissingKeyError { key: String },

    /// A folder or file could not be renamed
    #[error(
        "Failed to rename '{}' to '{}': {}.",
        .source_path.display(),
        .target_path.display(),
        .error
    )]
    RenameError {
        source_path: PathBuf,
        target_path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// Directory listing failed
    #[error("Directory walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// File name pattern could not be compiled
    #[error("Pattern error: {0}.")]
    GlobError(#[from] globset::Error),
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
