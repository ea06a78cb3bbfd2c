//! String validator.
//!
//! Only native strings are accepted; nothing is coerced into a string.
//! Constraints run in a fixed order and the first failure wins:
//! `enum`/`exact`, then `blank`, `max_length`, `min_length`, `pattern`.

use regex::Regex;
use serde::Deserialize;
use tsys_core::{ErrorCode, ErrorMessage, SchemaError, ValidationResult, Value};

use crate::common::{coerce_default, Choices, NULL_TEXT};

/// Options for [`StringValidator`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringOptions {
    /// Accept null.
    pub allow_null: bool,
    /// Value injected by an enclosing object when the key is absent.
    pub default: Option<Value>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Accept the empty string. Off by default.
    pub allow_blank: bool,
    /// Regular expression the whole string must match.
    pub pattern: Option<String>,
    /// Allowed values.
    #[serde(rename = "enum")]
    pub choices: Option<Vec<String>>,
    /// The single allowed value.
    pub exact: Option<String>,
}

impl StringOptions {
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

    /// Set the maximum length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the minimum length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Allow the empty string.
    pub fn with_allow_blank(mut self, allow_blank: bool) -> Self {
        self.allow_blank = allow_blank;
        self
    }

    /// Require the whole string to match `pattern`.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Restrict to a set of values.
    pub fn with_enum<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to exactly one value.
    pub fn with_exact(mut self, exact: impl Into<String>) -> Self {
        self.exact = Some(exact.into());
        self
    }
}

/// A pattern compiled to match the entire string.
#[derive(Debug, Clone)]
struct AnchoredPattern {
    source: String,
    regex: Regex,
}

impl PartialEq for AnchoredPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl AnchoredPattern {
    fn compile(source: String) -> Result<Self, SchemaError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| SchemaError::InvalidPattern {
            pattern: source.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { source, regex })
    }
}

/// Validates strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringValidator {
    allow_null: bool,
    default: Option<Value>,
    max_length: Option<usize>,
    min_length: Option<usize>,
    allow_blank: bool,
    pattern: Option<AnchoredPattern>,
    choices: Choices<String>,
}

impl StringValidator {
    /// Build a validator from options.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::InvalidPattern`] if `pattern` does not compile.
    /// - [`SchemaError::ConflictingOptions`] if `min_length > max_length`
    ///   or both `enum` and `exact` are set.
    /// - [`SchemaError::InvalidOption`] for an empty `enum` or a default
    ///   the validator rejects.
    pub fn new(options: StringOptions) -> Result<Self, SchemaError> {
        if let (Some(min), Some(max)) = (options.min_length, options.max_length) {
            if min > max {
                return Err(SchemaError::conflict(format!(
                    "min_length ({min}) is greater than max_length ({max})"
                )));
            }
        }
        let pattern = options.pattern.map(AnchoredPattern::compile).transpose()?;
        let mut validator = Self {
            allow_null: options.allow_null,
            default: None,
            max_length: options.max_length,
            min_length: options.min_length,
            allow_blank: options.allow_blank,
            pattern,
            choices: Choices::from_options(options.choices, options.exact)?,
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
    pub fn validate(&self, value: &Value, _strict: bool) -> ValidationResult {
        let s = match value {
            Value::Null if self.allow_null => return ValidationResult::Valid(Value::Null),
            Value::Null => return self.fail(ErrorCode::Null),
            Value::String(s) => s,
            _ => return self.fail(ErrorCode::Type),
        };

        match self.check(s) {
            Some(code) => self.fail(code),
            None => ValidationResult::Valid(Value::String(s.clone())),
        }
    }

    fn check(&self, s: &str) -> Option<ErrorCode> {
        if let Some(code) = self.choices.check(&s.to_string()) {
            return Some(code);
        }
        if !self.allow_blank && s.is_empty() {
            return Some(ErrorCode::Blank);
        }
        let length = s.chars().count();
        if self.max_length.is_some_and(|max| length > max) {
            return Some(ErrorCode::MaxLength);
        }
        if self.min_length.is_some_and(|min| length < min) {
            return Some(ErrorCode::MinLength);
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.regex.is_match(s) {
                return Some(ErrorCode::Pattern);
            }
        }
        None
    }

    fn fail(&self, code: ErrorCode) -> ValidationResult {
        let text = match code {
            ErrorCode::Null => NULL_TEXT.to_string(),
            ErrorCode::Blank => "Must not be blank.".to_string(),
            ErrorCode::MaxLength => format!(
                "Must have no more than {} characters.",
                self.max_length.unwrap_or_default()
            ),
            ErrorCode::MinLength => format!(
                "Must have at least {} characters.",
                self.min_length.unwrap_or_default()
            ),
            ErrorCode::Pattern => format!(
                "Must match the pattern /{}/.",
                self.pattern.as_ref().map(|p| p.source.as_str()).unwrap_or_default()
            ),
            ErrorCode::Enum => format!("Must be one of {}.", self.choices.describe()),
            ErrorCode::Exact => format!("Must be {}.", self.choices.describe()),
            _ => "Must be a string.".to_string(),
        };
        ValidationResult::failure(ErrorMessage::new(code, text))
    }
}
