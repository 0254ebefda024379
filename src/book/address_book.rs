//! The owning, ordered collection of records.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// An ordered list of contacts.
///
/// Records keep insertion order and are never deduplicated; several records
/// may share a name. Lookups are linear scans returning the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No uniqueness check is made.
    pub fn add_record(&mut self, record: Record) {
        debug!(name = %record.name, "Adding record");
        self.records.push(record);
    }

    /// Remove the first record structurally equal to `record`.
    pub fn remove_record(&mut self, record: &Record) -> BookResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r == record)
            .ok_or_else(|| BookError::RecordNotFound(record.name.to_string()))?;
        debug!(name = %record.name, index, "Removing record");
        Ok(self.records.remove(index))
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// First record with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == *name)
    }

    /// Mutable access to the first record with exactly this name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name == *name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every record to `path`, overwriting the file.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Io` if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.records)?;
        writer.flush()?;
        info!(path = %path.display(), records = self.records.len(), "Address book saved");
        Ok(())
    }

    /// Replace the in-memory records with those stored at `path`.
    ///
    /// On failure the current records are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Io` if the file cannot be read and
    /// `BookError::CorruptData` if it does not hold a valid record list.
    pub fn load(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        info!(path = %path.display(), records = records.len(), "Address book loaded");
        self.records = records;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Phone};
    use std::fs;
    use tempfile::TempDir;

    fn record(name: &str, phones: &[&str]) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            phones.iter().map(|p| Phone::new(*p).unwrap()).collect(),
        )
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1"]));
        book.add_record(record("Bob", &[]));
        book.add_record(record("Alice", &["2"]));

        assert_eq!(book.len(), 3);
        assert_eq!(names(&book), vec!["Alice", "Bob", "Alice"]);
        assert_eq!(book.find("Alice").unwrap().to_string(), "1");
    }

    #[test]
    fn test_add_then_remove_restores_state() {
        let mut book: AddressBook = vec![record("Alice", &["1"])].into_iter().collect();
        let before = book.clone();

        let bob = record("Bob", &["2"]);
        book.add_record(bob.clone());
        let removed = book.remove_record(&bob).unwrap();

        assert_eq!(removed, bob);
        assert_eq!(book, before);
    }

    #[test]
    fn test_remove_missing_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1"]));
        let result = book.remove_record(&record("Alice", &["2"]));
        assert!(matches!(result, Err(BookError::RecordNotFound(n)) if n == "Alice"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let book: AddressBook = vec![record("A", &[]), record("B", &[])]
            .into_iter()
            .collect();
        let first: Vec<_> = (&book).into_iter().collect();
        let second: Vec<_> = book.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1"]));
        book.find_mut("Alice").unwrap().add_phone("2").unwrap();
        assert_eq!(book.find("Alice").unwrap().to_string(), "1, 2");
        assert!(book.find_mut("Nobody").is_none());
    }

    #[test]
    fn test_save_then_load_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");

        let mut original = AddressBook::new();
        let mut alice = record("Alice", &["5551234", "5550000"]);
        alice.set_birthday("1990-04-15").unwrap();
        original.add_record(alice);
        original.add_record(record("Bob", &[]));
        original.save(&path).unwrap();

        let mut restored = AddressBook::new();
        restored.add_record(record("Stale", &["9"]));
        restored.load(&path).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "leftover content that is much longer than an empty list").unwrap();

        AddressBook::new().save(&path).unwrap();

        let mut book = AddressBook::new();
        book.add_record(record("X", &[]));
        book.load(&path).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut book = AddressBook::new();
        let result = book.load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(BookError::Io(_))));
    }

    #[test]
    fn test_load_corrupt_data_keeps_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1"]));

        for bad in [
            "not json",
            "{\"name\": \"Alice\"}",
            "[{\"name\": \"Alice\", \"phones\": [\"12ab\"]}]",
            "[{\"name\": \"\", \"phones\": []}]",
            "[{\"name\": \"Al\", \"birthday\": \"1990-02-30\"}]",
        ] {
            fs::write(&path, bad).unwrap();
            let result = book.load(&path);
            assert!(
                matches!(result, Err(BookError::CorruptData(_))),
                "expected CorruptData for {bad:?}, got {result:?}"
            );
        }
        assert_eq!(names(&book), vec!["Alice"]);
    }
}
