//! Test fixtures and sample data.

use address_book::{AddressBook, Birthday, Name, Phone, Record};

/// Create a record with one phone and an optional ISO birthday.
pub fn sample_record(name: &str, phone: &str, birthday: Option<&str>) -> Record {
    Record::new(
        Name::new(name).expect("valid fixture name"),
        Some(Phone::new(phone).expect("valid fixture phone")),
        birthday.map(|b| Birthday::parse(b).expect("valid fixture birthday")),
    )
}

/// A book with `count` contacts named `contact0..`, each with one phone.
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    (0..count)
        .map(|i| sample_record(&format!("contact{}", i), &format!("{:012}", i), None))
        .collect()
}

/// Alice (with birthday) and Bob (without).
#[allow(dead_code)]
pub fn alice_and_bob() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Alice", "123456789012", Some("1990-05-17")));
    book.add_record(sample_record("Bob", "987654321098", None));
    book
}
