//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name, an ordered list of phones, and at most one birthday.
///
/// The name is the record's identity and cannot change after creation.
/// Phones are matched by value; duplicates are not rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with an optional first phone and birthday.
    pub fn new(name: Name, phone: Option<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Whether any phone equals `phone`.
    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns `false` (and changes nothing) when no phone matches.
    pub fn remove_phone(&mut self, phone: &Phone) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace, in place, the first phone equal to `old` with `new`.
    ///
    /// Returns `false` (and changes nothing) when no phone matches.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> bool {
        match self.phones.iter_mut().find(|p| **p == *old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Days from today until the next birthday, or `None` without a birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, or `None` without a birthday.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }

    /// Phones joined with `separator`.
    pub fn joined_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Short listing line used by pagination: `name: phone, phone`.
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.name, self.joined_phones(", "))
    }
}

/// `name : phone,phone birthday` (birthday empty when unset).
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self
            .birthday
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        write!(f, "{} : {} {}", self.name, self.joined_phones(","), birthday)
    }
}
