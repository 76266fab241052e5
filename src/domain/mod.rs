//! Domain value objects.
//!
//! Contact fields are validated value objects built on a single generic
//! holder, [`ValidatedField`], which runs the field's rule on construction
//! and on every reassignment. Invalid data cannot be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule, BIRTHDAY_FORMAT};
pub use errors::{FieldKind, FieldResult, InvalidFieldError};
pub use field::{FieldRule, ValidatedField};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule, PHONE_DIGITS};
