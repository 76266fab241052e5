//! Birthday field and next-occurrence arithmetic.

use super::errors::{FieldKind, FieldResult, InvalidFieldError};
use super::field::{FieldRule, ValidatedField};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Format accepted by [`Birthday::parse`].
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts short years, unpadded fields, and a leading sign
static ISO_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile date regex"));

/// Rule for [`Birthday`].
///
/// `NaiveDate` can only hold real calendar dates, so the check itself
/// always passes; malformed input is rejected by [`Birthday::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = NaiveDate;
    const KIND: FieldKind = FieldKind::Birthday;

    fn check(_value: &NaiveDate) -> Result<(), String> {
        Ok(())
    }
}

/// A contact's date of birth. Dates in the future are accepted.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::parse("1990-05-17").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-17");
/// assert!(Birthday::parse("1990-02-30").is_err());
/// ```
pub type Birthday = ValidatedField<BirthdayRule>;

impl ValidatedField<BirthdayRule> {
    /// Parse an ISO `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFieldError` if the text is not a valid calendar date.
    pub fn parse(text: &str) -> FieldResult<Self> {
        let invalid = || {
            InvalidFieldError::new(
                FieldKind::Birthday,
                text,
                "birthday must be a valid date in format YYYY-MM-DD",
            )
        };

        let trimmed = text.trim();
        if !ISO_DATE_REGEX.is_match(trimmed) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(trimmed, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
        Self::new(date)
    }

    /// Next date, on or after `today`, on which this birthday falls.
    ///
    /// Feb 29 birthdays are observed on Feb 28 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = anniversary(*self.value(), today.year());
        if this_year < today {
            anniversary(*self.value(), today.year() + 1)
        } else {
            this_year
        }
    }

    /// Whole days from `today` until the next occurrence (0 when it is today).
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

fn anniversary(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
        .unwrap_or(birthday)
}
