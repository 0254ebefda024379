//! Domain value objects and types.
//!
//! Every value stored on a contact is a [`Field`]: a scalar that validates
//! itself on construction and on every later mutation, so invalid data can
//! never be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{Field, PlainField};
pub use name::Name;
pub use phone::Phone;
