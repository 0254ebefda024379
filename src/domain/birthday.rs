//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format accepted for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts unpadded months and days, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid birthday regex"));

/// A calendar date in strict `YYYY-MM-DD` form.
///
/// The raw string is kept alongside the parsed date so that searches match
/// against exactly what the user typed.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, Field};
///
/// let birthday = Birthday::new("1990-04-15").unwrap();
/// assert_eq!(birthday.value(), "1990-04-15");
/// assert!(Birthday::new("1990-02-30").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating format and calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not a
    /// real date in `YYYY-MM-DD` form.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();
        let date = Self::parse(&raw)?;
        Ok(Self { raw, date })
    }

    fn parse(value: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A February 29 birthday falls on March 1 in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.occurrence_in(today.year() + 1)
        }
    }
}

impl Field for Birthday {
    fn validate(value: &str) -> Result<(), ValidationError> {
        Self::parse(value).map(|_| ())
    }

    fn value(&self) -> &str {
        &self.raw
    }

    fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }
}

// Serde support - serialize as the raw string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
