//! # Error Types — Schema Construction Failures
//!
//! Invalid *data* never produces a Rust error: it is reported inside a
//! [`ValidationResult`](crate::ValidationResult). The errors here are for
//! invalid *schemas*: a programmer built a validator with options that
//! cannot be honoured, so construction fails immediately.

use thiserror::Error;

/// Error raised while constructing a validator or loading a definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A regular expression option failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as written in the schema.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// Two or more options contradict each other.
    #[error("conflicting options: {reason}")]
    ConflictingOptions {
        /// Which options conflict and how.
        reason: String,
    },

    /// A single option holds a value it can never accept.
    #[error("invalid value for option '{option}': {reason}")]
    InvalidOption {
        /// Option name, e.g. `multiple_of`.
        option: String,
        /// Why the value was refused.
        reason: String,
    },

    /// A declarative definition could not be parsed.
    #[error("malformed schema definition: {0}")]
    Definition(String),
}

impl SchemaError {
    /// Shorthand for [`SchemaError::ConflictingOptions`].
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::ConflictingOptions {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`SchemaError::InvalidOption`].
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Definition(err.to_string())
    }
}
