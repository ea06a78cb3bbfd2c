//! Boolean validator.
//!
//! Native booleans are always accepted. Outside strict mode a fixed,
//! case-sensitive set of string tokens and the numbers `1`/`0` are coerced,
//! and the empty string is treated as null.

use serde::Deserialize;
use tsys_core::{ErrorCode, ErrorMessage, SchemaError, ValidationResult, Value};

use crate::common::{coerce_default, NULL_TEXT};

const TRUE_TOKENS: [&str; 5] = ["true", "True", "1", "on", "yes"];
const FALSE_TOKENS: [&str; 5] = ["false", "False", "0", "off", "no"];

/// Options for [`BooleanValidator`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanOptions {
    /// Accept null (and, when not strict, the empty string).
    pub allow_null: bool,
    /// Value injected by an enclosing object when the key is absent.
    pub default: Option<Value>,
}

impl BooleanOptions {
    /// Allow null.
    pub fn with_allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = allow_null;
        self
    }

    /// Set the default.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Validates and coerces booleans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanValidator {
    allow_null: bool,
    default: Option<Value>,
}

impl BooleanValidator {
    /// Build a validator from options.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidOption`] if the default is not itself a valid boolean.
    pub fn new(options: BooleanOptions) -> Result<Self, SchemaError> {
        let mut validator = Self {
            allow_null: options.allow_null,
            default: None,
        };
        validator.default = coerce_default(options.default, |v| validator.validate(v, false))?;
        Ok(validator)
    }

    /// Whether null is accepted.
    pub fn allow_null(&self) -> bool {
        self.allow_null
    }

    /// The configured default.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Validate one raw value.
    pub fn validate(&self, value: &Value, strict: bool) -> ValidationResult {
        match value {
            Value::Null => self.null(),
            Value::Bool(b) => ValidationResult::Valid(Value::Bool(*b)),
            _ if strict => self.fail(ErrorCode::Type),
            Value::String(s) if s.is_empty() => self.null(),
            Value::String(s) => match coerce_token(s) {
                Some(b) => ValidationResult::Valid(Value::Bool(b)),
                None => self.fail(ErrorCode::Type),
            },
            Value::Integer(1) => ValidationResult::Valid(Value::Bool(true)),
            Value::Integer(0) => ValidationResult::Valid(Value::Bool(false)),
            Value::Float(f) if *f == 1.0 => ValidationResult::Valid(Value::Bool(true)),
            Value::Float(f) if *f == 0.0 => ValidationResult::Valid(Value::Bool(false)),
            _ => self.fail(ErrorCode::Type),
        }
    }

    fn null(&self) -> ValidationResult {
        if self.allow_null {
            ValidationResult::Valid(Value::Null)
        } else {
            self.fail(ErrorCode::Null)
        }
    }

    fn fail(&self, code: ErrorCode) -> ValidationResult {
        let text = match code {
            ErrorCode::Null => NULL_TEXT,
            _ => "Must be a valid boolean.",
        };
        ValidationResult::failure(ErrorMessage::new(code, text))
    }
}

fn coerce_token(token: &str) -> Option<bool> {
    if TRUE_TOKENS.contains(&token) {
        Some(true)
    } else if FALSE_TOKENS.contains(&token) {
        Some(false)
    } else {
        None
    }
}
