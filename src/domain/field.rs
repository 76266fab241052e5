//! Generic validated field holder.

use super::errors::{FieldKind, FieldResult, InvalidFieldError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// The constraint a [`ValidatedField`] enforces on its value.
pub trait FieldRule {
    /// Underlying value type.
    type Value: fmt::Display;

    /// Field reported in validation errors.
    const KIND: FieldKind;

    /// Check a candidate value, returning the violated rule on failure.
    fn check(value: &Self::Value) -> Result<(), String>;
}

/// A value that has passed its rule `R`.
///
/// Validation runs on construction and again on every reassignment, so a
/// `ValidatedField` never holds a value its rule rejects.
pub struct ValidatedField<R: FieldRule> {
    value: R::Value,
    rule: PhantomData<R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Validate `value` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFieldError` naming the field and the failed rule.
    pub fn new(value: impl Into<R::Value>) -> FieldResult<Self> {
        let value = value.into();
        Self::validate(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    fn validate(value: &R::Value) -> FieldResult<()> {
        R::check(value).map_err(|reason| InvalidFieldError::new(R::KIND, value.to_string(), reason))
    }

    /// Get the underlying value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// Replace the value, re-running the rule. On failure the old value is kept.
    pub fn set_value(&mut self, value: impl Into<R::Value>) -> FieldResult<()> {
        let value = value.into();
        Self::validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Consume the field and return a copy holding `value`.
    pub fn with_value(mut self, value: impl Into<R::Value>) -> FieldResult<Self> {
        self.set_value(value)?;
        Ok(self)
    }
}

impl<R: FieldRule> Clone for ValidatedField<R>
where
    R::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R: FieldRule> PartialEq for ValidatedField<R>
where
    R::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for ValidatedField<R> where R::Value: Eq {}

impl<R: FieldRule> Hash for ValidatedField<R>
where
    R::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: FieldRule> fmt::Debug for ValidatedField<R>
where
    R::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("ValidatedField<{}>", R::KIND))
            .field(&self.value)
            .finish()
    }
}

impl<R: FieldRule> fmt::Display for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Serde support - serialize as the bare value
impl<R: FieldRule> Serialize for ValidatedField<R>
where
    R::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize with validation
impl<'de, R: FieldRule> Deserialize<'de> for ValidatedField<R>
where
    R::Value: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <R::Value as Deserialize<'de>>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
