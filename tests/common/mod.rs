//! Shared test setup and assertions.

use address_book::{AddressBook, Record};

pub mod fixtures;

/// Names of the book's records in insertion order.
#[allow(dead_code)]
pub fn names(book: &AddressBook) -> Vec<String> {
    book.records()
        .map(|r| r.name().as_str().to_string())
        .collect()
}

/// Assert two records hold the same name, phones (in order), and birthday.
#[allow(dead_code)]
pub fn assert_same_record(actual: &Record, expected: &Record) {
    assert_eq!(actual.name(), expected.name(), "name mismatch");
    assert_eq!(actual.phones(), expected.phones(), "phones mismatch");
    assert_eq!(actual.birthday(), expected.birthday(), "birthday mismatch");
}
