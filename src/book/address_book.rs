use super::paginator::Paginator;
use crate::error::StorageResult;
use crate::models::Record;
use crate::storage::{BookStorage, FileStorage};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Rendering of a book with no records.
pub const EMPTY_BOOK_MESSAGE: &str = "No contacts yet";

/// Keyed collection of records, owned exclusively by the book.
///
/// Records are keyed by their name. Keys keep the order in which they were
/// first inserted; that order drives rendering and pagination. Replacing a
/// record under an existing key keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Insert `record` under its name, replacing any record already there.
    ///
    /// Returns a confirmation message.
    pub fn add_record(&mut self, record: Record) -> String {
        let key = record.name().as_str().to_string();
        let message = format!("Record with name {} added", key);

        if self.records.insert(key.clone(), record).is_some() {
            debug!(name = %key, "Replaced existing record");
        } else {
            debug!(name = %key, "Added record");
            self.order.push(key);
        }
        message
    }

    /// Remove the record named `name`. Returns `false` if there was none.
    pub fn remove_record(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_none() {
            debug!(name = %name, "No record to remove");
            return false;
        }
        self.order.retain(|key| key != name);
        debug!(name = %name, "Removed record");
        true
    }

    /// Case-insensitive search over each record's full rendering.
    ///
    /// Returns the matching renderings joined by newlines, or a "not found"
    /// message when nothing matches.
    pub fn find(&self, query: &str) -> String {
        let needle = query.to_lowercase();
        let matches: Vec<String> = self
            .records()
            .map(ToString::to_string)
            .filter(|rendered| rendered.to_lowercase().contains(&needle))
            .collect();

        debug!(query = %query, matches = matches.len(), "Find completed");

        if matches.is_empty() {
            format!("No contact found with param {}", query)
        } else {
            matches.join("\n")
        }
    }

    /// Case-sensitive substring search over names and raw phone values.
    ///
    /// Returns `(name, record)` pairs in insertion order. Birthdays are not
    /// searched.
    pub fn search(&self, query: &str) -> Vec<(&str, &Record)> {
        let found: Vec<(&str, &Record)> = self
            .records()
            .filter(|record| {
                record.name().as_str().contains(query)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .map(|record| (record.name().as_str(), record))
            .collect();

        debug!(query = %query, matches = found.len(), "Search completed");
        found
    }

    /// Page through the book, `page_size` records per page.
    pub fn iterate(&self, page_size: usize) -> Paginator<'_> {
        Paginator::new(&self.order, &self.records, page_size)
    }

    /// Write the whole book to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        FileStorage::new(path.as_ref()).save(self)
    }

    /// Read a book from `path`.
    ///
    /// # Errors
    ///
    /// `StorageError::NotFound` when the file does not exist; callers
    /// usually start from an empty book in that case.
    pub fn load(path: impl AsRef<Path>) -> StorageResult<Self> {
        FileStorage::new(path.as_ref()).load()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", EMPTY_BOOK_MESSAGE);
        }
        let lines: Vec<String> = self.records().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, Name, Phone};

    fn record(name: &str, phone: &str, birthday: Option<&str>) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            Some(Phone::new(phone).unwrap()),
            birthday.map(|b| Birthday::parse(b).unwrap()),
        )
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "123456789012", Some("1990-05-17")));
        book.add_record(record("Bob", "987654321098", None));
        book
    }

    #[test]
    fn test_add_record_confirms() {
        let mut book = AddressBook::new();
        let msg = book.add_record(record("Alice", "123456789012", None));
        assert_eq!(msg, "Record with name Alice added");
        assert_eq!(book.len(), 1);
        assert!(book.contains("Alice"));
    }

    #[test]
    fn test_add_record_overwrites_without_merge() {
        let mut book = sample_book();
        book.add_record(record("Alice", "555555555555", None));

        assert_eq!(book.len(), 2);
        let alice = book.get("Alice").unwrap();
        assert_eq!(alice.joined_phones(","), "555555555555");
        assert!(alice.birthday().is_none());
        // Position is kept
        assert_eq!(book.records().next().unwrap().name().as_str(), "Alice");
    }

    #[test]
    fn test_add_then_remove_leaves_empty() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "123456789012", None));
        assert!(book.remove_record("Alice"));
        assert!(book.is_empty());
        assert_eq!(book.iterate(2).count(), 0);
    }

    #[test]
    fn test_remove_missing_returns_false() {
        let mut book = sample_book();
        assert!(!book.remove_record("Carol"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let book = sample_book();
        assert_eq!(book.find("bob"), "Bob : 987654321098 ");
        assert_eq!(book.find("ALICE"), "Alice : 123456789012 1990-05-17");
    }

    #[test]
    fn test_find_matches_birthday_and_phone() {
        let book = sample_book();
        assert_eq!(book.find("1990-05"), "Alice : 123456789012 1990-05-17");
        assert_eq!(book.find("98765"), "Bob : 987654321098 ");
    }

    #[test]
    fn test_find_joins_multiple_matches() {
        let book = sample_book();
        assert_eq!(
            book.find(" : "),
            "Alice : 123456789012 1990-05-17\nBob : 987654321098 "
        );
    }

    #[test]
    fn test_find_not_found_message() {
        let book = sample_book();
        assert_eq!(book.find("zed"), "No contact found with param zed");
    }

    #[test]
    fn test_find_is_idempotent() {
        let book = sample_book();
        assert_eq!(book.find("o"), book.find("o"));
    }

    #[test]
    fn test_search_by_name_and_phone() {
        let book = sample_book();

        let by_phone = book.search("123");
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].0, "Alice");

        let by_name = book.search("Bo");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].0, "Bob");
    }

    #[test]
    fn test_search_results_follow_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Zoe", "100000000001", None));
        book.add_record(record("Adam", "100000000002", None));
        book.add_record(record("Mia", "200000000003", None));

        let names: Vec<&str> = book.search("1000").iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Zoe", "Adam"]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let book = sample_book();
        assert!(book.search("bob").is_empty());
    }

    #[test]
    fn test_search_ignores_birthday() {
        let book = sample_book();
        assert!(book.search("1990").is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(AddressBook::new().to_string(), EMPTY_BOOK_MESSAGE);
        assert_eq!(
            sample_book().to_string(),
            "Alice : 123456789012 1990-05-17\nBob : 987654321098 "
        );
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let book: AddressBook = vec![
            record("Zed", "111111111111", None),
            record("Amy", "222222222222", None),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }
}
