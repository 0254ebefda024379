//! Contact Book - an interactive personal contact manager.
//!
//! Contacts carry a name, any number of phone numbers, and an optional
//! birthday. Every value is validated on entry and on every edit. The
//! whole book can be saved to and restored from a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Self-validating field values (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` type for a single contact
//! - **book**: The ordered `AddressBook` collection and its persistence
//! - **commands**: Command parsing and the add/change/remove/search operations
//! - **repl**: The line-oriented command loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

// Re-export commonly used types
pub use book::AddressBook;
pub use commands::{Command, CommandError};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use repl::{Reply, Shell};
