//! Generic presence checks over a [`Record`].
//!
//! The validator never names a field. It walks the record in order and
//! dispatches on each value's kind:
//!
//! - text must be non-empty
//! - numbers must be strictly positive (`NaN` is not)
//! - every other kind is unsupported
//!
//! Adding a field to a schema therefore needs no change here.

use serde::Serialize;

use crate::error::{ValidationError, ValidationResult};
use crate::record::{Record, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    pub fn new() -> Self {
        FieldValidator
    }

    /// Returns `Ok(true)` when every field is present.
    ///
    /// Stops at the first failing field, in enumeration order.
    ///
    /// # Errors
    ///
    /// - `MissingField` for empty text or a non-positive number
    /// - `UnsupportedKind` for any value that is neither text nor a number
    pub fn check(&self, record: &Record) -> ValidationResult<bool> {
        for (name, value) in record.fields() {
            Self::check_field(name, value)?;
        }
        tracing::trace!(fields = record.len(), "record passed validation");
        Ok(true)
    }

    /// Serializes `value` into a record, then runs [`check`](Self::check).
    pub fn check_value<T: Serialize + ?Sized>(&self, value: &T) -> ValidationResult<bool> {
        let record = Record::from_serialize(value)?;
        self.check(&record)
    }

    /// Every failing field, in enumeration order. Empty when the record is valid.
    pub fn report(&self, record: &Record) -> Vec<ValidationError> {
        record
            .fields()
            .filter_map(|(name, value)| Self::check_field(name, value).err())
            .collect()
    }

    pub fn is_ready(&self, record: &Record) -> bool {
        self.check(record).is_ok()
    }

    fn check_field(name: &str, value: &Value) -> ValidationResult<()> {
        let present = match value {
            Value::Text(text) => !text.is_empty(),
            Value::Number(number) => *number > 0.0,
            other => return Err(ValidationError::unsupported_kind(name, other.kind())),
        };

        if present {
            Ok(())
        } else {
            tracing::debug!(field = name, "field failed its presence rule");
            Err(ValidationError::missing_field(name))
        }
    }
}
