//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact: a name, an ordered phone list, and an optional birthday.
///
/// Phone order is insertion order and is meaningful: field indexes used by
/// [`Record::set_field`] address phones by their 1-based position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Identifying name (not unique)
    pub name: Name,

    /// Phone numbers in insertion order, duplicates allowed
    #[serde(default)]
    pub phones: Vec<Phone>,

    /// Birthday, absent until assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name and an initial (possibly empty) phone list.
    pub fn new(name: Name, phones: Vec<Phone>) -> Self {
        Self {
            name,
            phones,
            birthday: None,
        }
    }

    /// Validate and append a phone.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<Phone> {
        let index = self.position_of(phone)?;
        debug!(name = %self.name, phone, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with a validated `new`, in place.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        let index = self.position_of(old)?;
        self.phones[index].set_value(new)?;
        debug!(name = %self.name, old, new = %self.phones[index], "Edited phone");
        Ok(())
    }

    /// Assign a birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> BookResult<()> {
        match self.birthday.as_mut() {
            Some(existing) => existing.set_value(birthday)?,
            None => self.birthday = Some(Birthday::new(birthday)?),
        }
        Ok(())
    }

    /// Update a field addressed by position.
    ///
    /// `0` is the name, `1..=phones.len()` a phone (1-based), and
    /// `phones.len() + 1` the birthday. Any other index fails with
    /// `InvalidFieldIndex` and nothing is changed.
    pub fn set_field(&mut self, index: usize, value: impl Into<String>) -> BookResult<()> {
        let phone_count = self.phones.len();
        match index {
            0 => self.name.set_value(value)?,
            i if i <= phone_count => self.phones[i - 1].set_value(value)?,
            i if i == phone_count + 1 => self.set_birthday(value)?,
            i => return Err(BookError::InvalidFieldIndex(i)),
        }
        Ok(())
    }

    /// Days from today until the next birthday, `None` without a birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(chrono::Local::now().date_naive())
    }

    /// Days from `today` until the next birthday on or after it.
    ///
    /// Returns `0` when the birthday is today.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let next = self.birthday.as_ref()?.next_occurrence(today)?;
        Some((next - today).num_days())
    }

    /// Whether `query` occurs in the name, the concatenated phones, or the birthday.
    pub fn matches(&self, query: &str) -> bool {
        if self.name.as_str().contains(query) {
            return true;
        }
        let phones: String = self.phones.iter().map(Phone::as_str).collect();
        if phones.contains(query) {
            return true;
        }
        self.birthday
            .as_ref()
            .is_some_and(|birthday| birthday.value().contains(query))
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

/// Renders the comma-joined phone list. The name is left to the caller.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "{}", phones.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            phones.iter().map(|p| Phone::new(*p).unwrap()).collect(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_new_has_no_birthday() {
        let r = record("Alice", &[]);
        assert!(r.phones.is_empty());
        assert!(r.birthday.is_none());
        assert_eq!(r.days_to_birthday(), None);
    }

    #[test]
    fn test_add_phone_validates() {
        let mut r = record("Alice", &["111"]);
        r.add_phone("222").unwrap();
        assert!(matches!(r.add_phone("2x2"), Err(BookError::Validation(_))));
        assert_eq!(r.to_string(), "111, 222");
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut r = record("Alice", &["111", "222", "111"]);
        let removed = r.remove_phone("111").unwrap();
        assert_eq!(removed.as_str(), "111");
        assert_eq!(r.to_string(), "222, 111");

        assert!(matches!(
            r.remove_phone("999"),
            Err(BookError::PhoneNotFound(p)) if p == "999"
        ));
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut r = record("Alice", &["111", "222", "333"]);
        r.edit_phone("222", "444").unwrap();
        assert_eq!(r.phones[1].as_str(), "444");
        assert_eq!(r.to_string(), "111, 444, 333");
    }

    #[test]
    fn test_edit_phone_errors() {
        let mut r = record("Alice", &["111"]);
        assert!(matches!(
            r.edit_phone("999", "444"),
            Err(BookError::PhoneNotFound(_))
        ));
        assert!(matches!(
            r.edit_phone("111", "abc"),
            Err(BookError::Validation(_))
        ));
        assert_eq!(r.phones[0].as_str(), "111");
    }

    #[test]
    fn test_set_field_by_index() {
        let mut r = record("Alice", &["111", "222"]);
        r.set_field(0, "Alicia").unwrap();
        r.set_field(2, "333").unwrap();
        r.set_field(3, "1990-04-15").unwrap();

        assert_eq!(r.name.as_str(), "Alicia");
        assert_eq!(r.to_string(), "111, 333");
        assert_eq!(r.birthday.as_ref().unwrap().value(), "1990-04-15");

        // birthday index moves with the phone count
        r.set_field(3, "1991-05-16").unwrap();
        assert_eq!(r.birthday.as_ref().unwrap().value(), "1991-05-16");
    }

    #[test]
    fn test_set_field_out_of_range() {
        let mut r = record("Alice", &["111"]);
        assert!(matches!(
            r.set_field(3, "999"),
            Err(BookError::InvalidFieldIndex(3))
        ));
        assert!(matches!(r.set_field(0, " "), Err(BookError::Validation(_))));
        assert_eq!(r, record("Alice", &["111"]));
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let mut r = record("Alice", &[]);
        r.set_birthday("1990-06-10").unwrap();
        assert_eq!(r.days_to_birthday_from(date(2024, 6, 10)), Some(0));
        assert_eq!(r.days_to_birthday_from(date(2024, 6, 1)), Some(9));
    }

    #[test]
    fn test_days_to_birthday_just_passed() {
        let mut r = record("Alice", &[]);
        r.set_birthday("1990-06-10").unwrap();
        // 2024-06-11 -> 2025-06-10 does not cross Feb 29
        assert_eq!(r.days_to_birthday_from(date(2024, 6, 11)), Some(364));
        // 2023-06-11 -> 2024-06-10 crosses 2024-02-29
        assert_eq!(r.days_to_birthday_from(date(2023, 6, 11)), Some(365));
    }

    #[test]
    fn test_days_to_birthday_leap_day() {
        let mut r = record("Alice", &[]);
        r.set_birthday("2000-02-29").unwrap();
        assert_eq!(r.days_to_birthday_from(date(2023, 2, 28)), Some(1));
        assert_eq!(r.days_to_birthday_from(date(2023, 3, 1)), Some(0));
        assert_eq!(r.days_to_birthday_from(date(2024, 2, 28)), Some(1));
        // Mar 1 stand-in already passed, next one is the real Feb 29
        assert_eq!(r.days_to_birthday_from(date(2023, 3, 2)), Some(364));
    }

    #[test]
    fn test_matches_name_phones_birthday() {
        let mut r = record("Alice", &["123", "456"]);
        assert!(r.matches("lic"));
        assert!(r.matches("34"));
        assert!(!r.matches("1990"));

        r.set_birthday("1990-04-15").unwrap();
        assert!(r.matches("1990"));
        assert!(!r.matches("Bob"));
    }
}
