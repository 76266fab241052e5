//! Phone number field.

use super::errors::FieldKind;
use super::field::{FieldRule, ValidatedField};

/// Number of digits every stored phone number has.
pub const PHONE_DIGITS: usize = 12;

/// Rule for [`Phone`]: exactly twelve ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;
    const KIND: FieldKind = FieldKind::Phone;

    fn check(value: &String) -> Result<(), String> {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err("phone must be a combination of digits".to_string());
        }
        if value.len() != PHONE_DIGITS {
            return Err(format!("phone number must have {} digits", PHONE_DIGITS));
        }
        Ok(())
    }
}

/// A validated phone number.
///
/// A record without phones simply holds none; there is no empty `Phone`.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("380501234567").unwrap();
/// assert_eq!(phone.as_str(), "380501234567");
/// assert!(Phone::new("+380501234567").is_err());
/// ```
pub type Phone = ValidatedField<PhoneRule>;

impl ValidatedField<PhoneRule> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
