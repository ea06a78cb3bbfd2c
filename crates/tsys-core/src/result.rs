//! # Validation Results
//!
//! The outcome of one `validate` call: the coerced value, or the tree of
//! everything that went wrong. There is no partially-valid success; a
//! composite value with one bad child is invalid as a whole.

use crate::message::ErrorMessage;
use crate::tree::ErrorTree;
use crate::value::Value;

/// Success with a typed value, or failure with an [`ErrorTree`].
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum ValidationResult {
    /// The input was accepted and coerced to this value.
    Valid(Value),
    /// The input was rejected. The tree is never empty.
    Invalid(ErrorTree),
}

impl ValidationResult {
    /// A failure consisting of a single message at the root.
    pub fn failure(message: ErrorMessage) -> Self {
        ValidationResult::Invalid(ErrorTree::leaf(message))
    }

    /// Whether validation succeeded.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The coerced value, if valid.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ValidationResult::Valid(value) => Some(value),
            ValidationResult::Invalid(_) => None,
        }
    }

    /// The error tree, if invalid.
    pub fn errors(&self) -> Option<&ErrorTree> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    /// Codes of every failure in iteration order; empty when valid.
    pub fn codes(&self) -> Vec<&'static str> {
        self.errors().map(ErrorTree::codes).unwrap_or_default()
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<Value, ErrorTree> {
        match self {
            ValidationResult::Valid(value) => Ok(value),
            ValidationResult::Invalid(errors) => Err(errors),
        }
    }
}

impl From<Result<Value, ErrorTree>> for ValidationResult {
    fn from(result: Result<Value, ErrorTree>) -> Self {
        match result {
            Ok(value) => ValidationResult::Valid(value),
            Err(errors) => ValidationResult::Invalid(errors),
        }
    }
}

impl From<ValidationResult> for Result<Value, ErrorTree> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ErrorCode;

    #[test]
    fn test_valid_has_value_only() {
        let result = ValidationResult::Valid(Value::Integer(1));
        assert!(result.is_valid());
        assert_eq!(result.value(), Some(&Value::Integer(1)));
        assert!(result.errors().is_none());
        assert!(result.codes().is_empty());
    }

    #[test]
    fn test_failure_has_errors_only() {
        let result = ValidationResult::failure(ErrorMessage::new(ErrorCode::Null, "May not be null."));
        assert!(!result.is_valid());
        assert!(result.value().is_none());
        assert_eq!(result.codes(), vec!["null"]);
    }

    #[test]
    fn test_into_result_roundtrip() {
        let ok: Result<Value, ErrorTree> = ValidationResult::Valid(Value::Bool(true)).into();
        assert_eq!(ok, Ok(Value::Bool(true)));

        let err = ValidationResult::failure(ErrorMessage::new(ErrorCode::Type, "Must be a string."))
            .into_result()
            .unwrap_err();
        assert_eq!(err.codes(), vec!["type"]);
        assert_eq!(ValidationResult::from(Err(err.clone())), ValidationResult::Invalid(err));
    }
}
