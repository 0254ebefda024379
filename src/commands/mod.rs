//! Command parsing and the contact operations behind each command.
//!
//! The interactive loop reads a line, picks a [`Command`] by prefix, and
//! calls the matching operation with the raw line and the live book.
//! Operations never leak internal errors: every lookup miss becomes
//! "Contact not found" and every other failure "Invalid command format".

pub mod operations;

pub use operations::{add, change, load, remove, save, search, show_all};

use crate::domain::ValidationError;
use crate::error::BookError;
use thiserror::Error;

/// The two user-facing failures a contact operation can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The named contact does not exist
    #[error("Contact not found")]
    NotFound,

    /// Missing arguments, bad index, or a value that failed validation
    #[error("Invalid command format")]
    InvalidFormat,
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::RecordNotFound(_) | BookError::PhoneNotFound(_) => CommandError::NotFound,
            _ => CommandError::InvalidFormat,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(_: ValidationError) -> Self {
        CommandError::InvalidFormat
    }
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Which operation an input line selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Remove,
    ShowAll,
    Save,
    Load,
    Search,
    Exit,
    Unknown,
}

impl Command {
    /// Words that end the session.
    pub const EXIT_WORDS: [&'static str; 3] = ["good bye", "close", "exit"];

    /// Select a command by the fixed prefix table.
    pub fn parse(line: &str) -> Self {
        if line == "hello" {
            Command::Hello
        } else if line.starts_with("add ") {
            Command::Add
        } else if line.starts_with("change ") {
            Command::Change
        } else if line.starts_with("remove") {
            Command::Remove
        } else if line == "show all" {
            Command::ShowAll
        } else if line.starts_with("save") {
            Command::Save
        } else if line.starts_with("load") {
            Command::Load
        } else if line.starts_with("search") {
            Command::Search
        } else if Self::EXIT_WORDS.contains(&line) {
            Command::Exit
        } else {
            Command::Unknown
        }
    }
}
