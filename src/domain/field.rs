//! The `Field` contract shared by every value held in a record.

use super::errors::ValidationError;

/// A single self-validating scalar value.
///
/// The base contract accepts any value: `validate` defaults to `Ok(())`.
/// Specialized fields override it with their own predicate. Implementors
/// must run `validate` before storing a value, both at construction and in
/// `set_value`, so a field never holds an invalid value at rest.
pub trait Field: Sized {
    /// Check a raw value against this field's predicate.
    fn validate(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Get the stored value as a string slice.
    fn value(&self) -> &str;

    /// Validate `value` and, on success, replace the stored value entirely.
    ///
    /// # Errors
    ///
    /// Returns the field's validation error and leaves the old value in place.
    fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError>;
}

/// An unconstrained field. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlainField(String);

impl PlainField {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Field for PlainField {
    fn value(&self) -> &str {
        &self.0
    }

    fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.0 = value.into();
        Ok(())
    }
}
