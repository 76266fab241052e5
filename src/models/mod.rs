//! Data models for the address book.
//!
//! A [`Record`] aggregates one contact's name, phones, and optional birthday.

pub mod record;

pub use record::Record;
