//! Address book storage.

pub mod address_book;

pub use address_book::AddressBook;
