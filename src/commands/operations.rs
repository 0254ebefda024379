//! Contact operations.
//!
//! Each operation receives the whole command line (verb included) and the
//! address book, and returns the text to print.

use super::{CommandError, CommandResult};
use crate::book::AddressBook;
use crate::domain::{Name, Phone};
use crate::error::BookResult;
use crate::models::Record;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Arguments after the verb, split on whitespace.
fn args(command: &str) -> Vec<&str> {
    command.split_whitespace().skip(1).collect()
}

/// Turn an operation result into the line shown to the user.
fn respond(operation: &str, result: CommandResult<String>) -> String {
    result.unwrap_or_else(|err| {
        warn!(operation, error = %err, "Command failed");
        err.to_string()
    })
}

fn render<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(|record| format!("{}: {}", record.name, record))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add name [phone...]`
pub fn add(command: &str, book: &mut AddressBook) -> String {
    respond("add", try_add(command, book))
}

fn try_add(command: &str, book: &mut AddressBook) -> CommandResult<String> {
    let args = args(command);
    let (name, phones) = args.split_first().ok_or(CommandError::InvalidFormat)?;

    let name = Name::new(*name)?;
    let phones = phones
        .iter()
        .map(|p| Phone::new(*p))
        .collect::<Result<Vec<_>, _>>()?;

    let reply = if phones.is_empty() {
        format!("{} added without a phone number", name)
    } else {
        let listed: Vec<&str> = phones.iter().map(Phone::as_str).collect();
        format!("{} added with phone number: {}", name, listed.join(", "))
    };
    book.add_record(Record::new(name, phones));
    Ok(reply)
}

/// `change name field_index new_value`
///
/// Index 0 is the name, 1..=N the phones, N+1 the birthday.
pub fn change(command: &str, book: &mut AddressBook) -> String {
    respond("change", try_change(command, book))
}

fn try_change(command: &str, book: &mut AddressBook) -> CommandResult<String> {
    let args = args(command);
    let &[name, index, value, ..] = args.as_slice() else {
        return Err(CommandError::InvalidFormat);
    };
    let index: usize = index.parse().map_err(|_| CommandError::InvalidFormat)?;

    let record = book.find_mut(name).ok_or(CommandError::NotFound)?;
    record.set_field(index, value)?;
    debug!(name, index, value, "Field changed");
    Ok(format!("{}'s field {} updated to {}", name, index, value))
}

/// `show all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found".to_string();
    }
    render(book)
}

/// `remove name`
pub fn remove(command: &str, book: &mut AddressBook) -> String {
    respond("remove", try_remove(command, book))
}

fn try_remove(command: &str, book: &mut AddressBook) -> CommandResult<String> {
    let args = args(command);
    let name = *args.first().ok_or(CommandError::InvalidFormat)?;

    let record = book.find(name).cloned().ok_or(CommandError::NotFound)?;
    book.remove_record(&record)?;
    Ok(format!("{} removed", name))
}

/// `search query`
///
/// Matches on name, concatenated phones, or birthday.
pub fn search(command: &str, book: &AddressBook) -> String {
    respond("search", try_search(command, book))
}

fn try_search(command: &str, book: &AddressBook) -> CommandResult<String> {
    let args = args(command);
    let query = *args.first().ok_or(CommandError::InvalidFormat)?;

    let results: Vec<&Record> = book.iter().filter(|r| r.matches(query)).collect();
    if results.is_empty() {
        return Ok(format!("No contacts found containing {}", query));
    }
    Ok(render(results))
}

/// The file a `save`/`load` line refers to, falling back to `default`.
fn target_path(command: &str, default: &Path) -> PathBuf {
    args(command)
        .first()
        .map(|p| PathBuf::from(*p))
        .unwrap_or_else(|| default.to_path_buf())
}

/// `save [path]`
///
/// Failures are returned, not translated, so the loop can report them.
pub fn save(command: &str, book: &AddressBook, default: &Path) -> BookResult<String> {
    let path = target_path(command, default);
    book.save(&path)?;
    Ok(format!("Address book saved to {}", path.display()))
}

/// `load [path]`
pub fn load(command: &str, book: &mut AddressBook, default: &Path) -> BookResult<String> {
    let path = target_path(command, default);
    book.load(&path)?;
    Ok(format!("Address book loaded from {}", path.display()))
}
