//! Data models for the contact book.
//!
//! This module contains the `Record` type that groups a contact's fields.

pub mod record;

pub use record::Record;
