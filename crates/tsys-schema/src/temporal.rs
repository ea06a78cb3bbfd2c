//! Date, time and datetime validators.
//!
//! Each accepts its native [`Value`] variant unchanged, or a string in the
//! matching grammar (see [`crate::grammar`]). String parsing is the normal
//! input path for these types, so it is allowed even in strict mode.

use serde::Deserialize;
use tsys_core::{ErrorCode, ErrorMessage, SchemaError, ValidationResult, Value};

use crate::common::{coerce_default, NULL_TEXT};
use crate::grammar::{self, GrammarError};

/// Options shared by [`DateValidator`], [`TimeValidator`] and [`DateTimeValidator`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemporalOptions {
    /// Accept null.
    pub allow_null: bool,
    /// Value injected by an enclosing object when the key is absent.
    /// Usually given as a string in the validator's grammar.
    pub default: Option<Value>,
}

impl TemporalOptions {
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

fn grammar_code(error: GrammarError) -> ErrorCode {
    match error {
        GrammarError::Format => ErrorCode::Format,
        GrammarError::Invalid => ErrorCode::Invalid,
    }
}

macro_rules! temporal_validator {
    (
        $(#[$meta:meta])*
        $name:ident,
        variant: $variant:ident,
        parse: $parse:path,
        noun: $noun:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            allow_null: bool,
            default: Option<Value>,
        }

        impl $name {
            /// Build a validator from options.
            ///
            /// # Errors
            ///
            /// Returns [`SchemaError::InvalidOption`] if the default does not parse.
            pub fn new(options: TemporalOptions) -> Result<Self, SchemaError> {
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

            /// Validate one raw value. `strict` has no effect here.
            pub fn validate(&self, value: &Value, _strict: bool) -> ValidationResult {
                match value {
                    Value::Null if self.allow_null => ValidationResult::Valid(Value::Null),
                    Value::Null => self.fail(ErrorCode::Null),
                    Value::$variant(native) => ValidationResult::Valid(Value::$variant(*native)),
                    Value::String(text) => match $parse(text) {
                        Ok(parsed) => ValidationResult::Valid(Value::$variant(parsed)),
                        Err(error) => self.fail(grammar_code(error)),
                    },
                    _ => self.fail(ErrorCode::Type),
                }
            }

            fn fail(&self, code: ErrorCode) -> ValidationResult {
                let text = match code {
                    ErrorCode::Null => NULL_TEXT,
                    ErrorCode::Format => concat!("Must be a valid ", $noun, " format."),
                    ErrorCode::Invalid => concat!("Must be a real ", $noun, "."),
                    _ => concat!("Must be a valid ", $noun, "."),
                };
                ValidationResult::failure(ErrorMessage::new(code, text))
            }
        }
    };
}

temporal_validator!(
    /// Validates calendar dates (`YYYY-MM-DD`).
    DateValidator,
    variant: Date,
    parse: grammar::parse_date,
    noun: "date"
);

temporal_validator!(
    /// Validates wall-clock times (`HH:MM:SS[.ffffff]`).
    TimeValidator,
    variant: Time,
    parse: grammar::parse_time,
    noun: "time"
);

temporal_validator!(
    /// Validates datetimes, naive or with a fixed offset.
    DateTimeValidator,
    variant: DateTime,
    parse: grammar::parse_datetime,
    noun: "datetime"
);
