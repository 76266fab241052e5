//! Contact name field.

use super::errors::FieldKind;
use super::field::{FieldRule, ValidatedField};

/// Rule for [`Name`]: the text must not be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;
    const KIND: FieldKind = FieldKind::Name;

    fn check(value: &String) -> Result<(), String> {
        if value.is_empty() {
            return Err("name cannot be empty".to_string());
        }
        Ok(())
    }
}

/// A contact's name. Unique key of a record inside an address book.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert!(Name::new("").is_err());
/// ```
pub type Name = ValidatedField<NameRule>;

impl ValidatedField<NameRule> {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
