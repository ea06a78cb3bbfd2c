//! Pieces of the primitive validation skeleton shared by several validators.

use std::fmt;

use tsys_core::{ErrorCode, SchemaError, ValidationResult, Value};

pub(crate) const NULL_TEXT: &str = "May not be null.";

/// Allowed-value constraint after `enum` and `exact` have been normalised.
///
/// A one-element `enum` becomes [`Choices::Exactly`], so it reports `exact`
/// rather than `enum` on mismatch.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum Choices<T> {
    #[default]
    Any,
    OneOf(Vec<T>),
    Exactly(T),
}

impl<T: PartialEq + fmt::Debug> Choices<T> {
    pub(crate) fn from_options(choices: Option<Vec<T>>, exact: Option<T>) -> Result<Self, SchemaError> {
        match (choices, exact) {
            (Some(_), Some(_)) => Err(SchemaError::conflict(
                "'enum' and 'exact' cannot both be set",
            )),
            (Some(choices), None) if choices.is_empty() => Err(SchemaError::invalid_option(
                "enum",
                "must list at least one value",
            )),
            (Some(mut choices), None) if choices.len() == 1 => {
                Ok(Choices::Exactly(choices.remove(0)))
            }
            (Some(choices), None) => Ok(Choices::OneOf(choices)),
            (None, Some(exact)) => Ok(Choices::Exactly(exact)),
            (None, None) => Ok(Choices::Any),
        }
    }

    /// `enum` is checked before `exact`; at most one of them is ever set.
    pub(crate) fn check(&self, value: &T) -> Option<ErrorCode> {
        match self {
            Choices::Any => None,
            Choices::OneOf(choices) => (!choices.contains(value)).then_some(ErrorCode::Enum),
            Choices::Exactly(exact) => (exact != value).then_some(ErrorCode::Exact),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Choices::Any => String::new(),
            Choices::OneOf(choices) => choices
                .iter()
                .map(|c| format!("{c:?}"))
                .collect::<Vec<_>>()
                .join(", "),
            Choices::Exactly(exact) => format!("{exact:?}"),
        }
    }
}

/// Run a configured default through its own validator and keep the coerced form.
pub(crate) fn coerce_default(
    default: Option<Value>,
    validate: impl FnOnce(&Value) -> ValidationResult,
) -> Result<Option<Value>, SchemaError> {
    let Some(raw) = default else {
        return Ok(None);
    };
    match validate(&raw) {
        ValidationResult::Valid(value) => Ok(Some(value)),
        ValidationResult::Invalid(errors) => Err(SchemaError::invalid_option(
            "default",
            format!("rejected by its own validator: {}", errors.codes().join(", ")),
        )),
    }
}
