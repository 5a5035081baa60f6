//! Error types produced by the form crate.
//!
//! | Error | When |
//! |-------|------|
//! | [`FieldError::NoOptions`] | A select field was requested with zero options |
//! | [`FieldError::UnexpectedOptions`] | A text field was requested with options |
//! | [`FieldError::UnknownField`] | An operation named an id that is not in the collection |
//! | [`FieldError::UnknownOption`] | A select was set to a value it does not offer |
//! | [`FieldError::KindMismatch`] | A text operation hit a select field or the reverse |
//! | [`ValidationError`] | A header or value was empty at submit time |
use std::fmt;

use thiserror::Error;

use crate::field::{FieldId, FieldKind};

/// Errors raised while constructing or mutating fields.
///
/// `NoOptions` is the invalid-construction case: the field never enters the
/// collection and no id is consumed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    #[error("select field requires at least one option")]
    NoOptions,

    #[error("{0} field does not take options")]
    UnexpectedOptions(FieldKind),

    #[error("no field with id {0}")]
    UnknownField(FieldId),

    #[error("field {field} has no option with value {value:?}")]
    UnknownOption { field: FieldId, value: String },

    #[error("field {field} is a {actual} field, expected {expected}")]
    KindMismatch {
        field: FieldId,
        expected: FieldKind,
        actual: FieldKind,
    },
}

/// Which half of a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    EmptyHeader,
    EmptyValue,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::EmptyHeader => write!(f, "header is empty"),
            ValidationReason::EmptyValue => write!(f, "value is empty"),
        }
    }
}

/// First field that failed the non-empty check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field {position} ({field}): {reason}")]
pub struct ValidationError {
    pub field: FieldId,
    pub position: usize,
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Message shown next to the offending control.
    pub fn user_message(&self) -> &'static str {
        "Please enter valid text for headers and values."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_messages() {
        assert_eq!(
            FieldError::NoOptions.to_string(),
            "select field requires at least one option"
        );
        assert_eq!(
            FieldError::UnexpectedOptions(FieldKind::Text).to_string(),
            "text field does not take options"
        );
    }

    #[test]
    fn validation_error_names_position_and_reason() {
        let err = ValidationError {
            field: FieldId::new(7),
            position: 2,
            reason: ValidationReason::EmptyValue,
        };
        assert_eq!(err.to_string(), "field 2 (#7): value is empty");
    }
}
