//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating or persisting an address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record matched the lookup
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// The record has no such phone
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// Field index outside name/phones/birthday range
    #[error("Invalid field index: {0}")]
    InvalidFieldIndex(usize),

    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file does not contain a valid record list
    #[error("Corrupt data: {0}")]
    CorruptData(#[source] serde_json::Error),
}

// I/O failures surfaced through serde_json stay I/O errors.
impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            BookError::Io(err.into())
        } else {
            BookError::CorruptData(err)
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
