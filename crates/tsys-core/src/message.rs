//! # Error Messages
//!
//! A single labeled failure: a stable machine-readable [`ErrorCode`] plus
//! a human-readable text. Where the message lives in the input is decided
//! by its position in an [`ErrorTree`](crate::ErrorTree), not stored here.

use std::fmt;

use serde::Serialize;

/// Stable identifier for every kind of validation failure.
///
/// The string form returned by [`ErrorCode::as_str`] is part of the public
/// contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Value was null and the validator does not allow null.
    Null,
    /// Value has the wrong type and could not be coerced.
    Type,
    /// String was empty and blank strings are not allowed.
    Blank,
    /// String is longer than `max_length`.
    MaxLength,
    /// String is shorter than `min_length`.
    MinLength,
    /// String does not match `pattern`.
    Pattern,
    /// Value is not one of the allowed choices.
    Enum,
    /// Value is not the single allowed value.
    Exact,
    /// Number is greater than `maximum`.
    Maximum,
    /// Number is less than `minimum`.
    Minimum,
    /// Number is greater than or equal to `exclusive_maximum`.
    ExclusiveMaximum,
    /// Number is less than or equal to `exclusive_minimum`.
    ExclusiveMinimum,
    /// Number is not a multiple of `multiple_of`.
    MultipleOf,
    /// Floating value cannot be represented as an integer.
    Integer,
    /// Number is NaN or infinite.
    Finite,
    /// Temporal string does not match the grammar.
    Format,
    /// Temporal string matches the grammar but names an impossible value.
    Invalid,
    /// Object has a key that is not a string.
    InvalidKey,
    /// Object has a key that the schema forbids.
    InvalidProperty,
    /// A required key is missing.
    Required,
    /// Object has no properties but at least one is needed.
    Empty,
    /// Object has fewer than `min_properties` keys.
    MinProperties,
    /// Object has more than `max_properties` keys.
    MaxProperties,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 23] = [
        ErrorCode::Null,
        ErrorCode::Type,
        ErrorCode::Blank,
        ErrorCode::MaxLength,
        ErrorCode::MinLength,
        ErrorCode::Pattern,
        ErrorCode::Enum,
        ErrorCode::Exact,
        ErrorCode::Maximum,
        ErrorCode::Minimum,
        ErrorCode::ExclusiveMaximum,
        ErrorCode::ExclusiveMinimum,
        ErrorCode::MultipleOf,
        ErrorCode::Integer,
        ErrorCode::Finite,
        ErrorCode::Format,
        ErrorCode::Invalid,
        ErrorCode::InvalidKey,
        ErrorCode::InvalidProperty,
        ErrorCode::Required,
        ErrorCode::Empty,
        ErrorCode::MinProperties,
        ErrorCode::MaxProperties,
    ];

    /// The stable string code, e.g. `"max_length"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Null => "null",
            ErrorCode::Type => "type",
            ErrorCode::Blank => "blank",
            ErrorCode::MaxLength => "max_length",
            ErrorCode::MinLength => "min_length",
            ErrorCode::Pattern => "pattern",
            ErrorCode::Enum => "enum",
            ErrorCode::Exact => "exact",
            ErrorCode::Maximum => "maximum",
            ErrorCode::Minimum => "minimum",
            ErrorCode::ExclusiveMaximum => "exclusive_maximum",
            ErrorCode::ExclusiveMinimum => "exclusive_minimum",
            ErrorCode::MultipleOf => "multiple_of",
            ErrorCode::Integer => "integer",
            ErrorCode::Finite => "finite",
            ErrorCode::Format => "format",
            ErrorCode::Invalid => "invalid",
            ErrorCode::InvalidKey => "invalid_key",
            ErrorCode::InvalidProperty => "invalid_property",
            ErrorCode::Required => "required",
            ErrorCode::Empty => "empty",
            ErrorCode::MinProperties => "min_properties",
            ErrorCode::MaxProperties => "max_properties",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorMessage {
    /// Human-readable description, e.g. `"Must be a number."`.
    pub text: String,
    /// Machine-readable code.
    pub code: ErrorCode,
}

impl ErrorMessage {
    /// Create a message from a code and its text.
    pub fn new(code: ErrorCode, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            code,
        }
    }

    /// The message rendered in the requested style.
    pub fn render(&self, style: MessageStyle) -> &str {
        match style {
            MessageStyle::Code => self.code.as_str(),
            MessageStyle::Text => &self.text,
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Which half of an [`ErrorMessage`] a rendering should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStyle {
    /// Stable codes, for programmatic consumers.
    Code,
    /// Human-readable texts, for display.
    #[default]
    Text,
}
