//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::errors`].

use crate::domain::InvalidFieldError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading the book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The book file does not exist yet
    #[error("Address book file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file decoded but its contents are inconsistent
    #[error("Corrupt address book: {0}")]
    Corrupt(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while parsing or running a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Input did not match any known command
    #[error("Unrecognized command: {0}")]
    Unrecognized(String),

    /// Known command with malformed arguments
    #[error("Invalid arguments for '{command}'. Usage: {usage}")]
    InvalidArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// A name, phone, or birthday failed validation
    #[error(transparent)]
    Field(#[from] InvalidFieldError),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
