//! The closed set of validator kinds.

use std::fmt;

use tsys_core::{ValidationResult, Value};

use crate::boolean::BooleanValidator;
use crate::numeric::{IntegerValidator, NumberValidator};
use crate::object::ObjectValidator;
use crate::string::StringValidator;
use crate::temporal::{DateTimeValidator, DateValidator, TimeValidator};

/// A configured rule-set for one value.
///
/// Validators are immutable once built and may be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// Booleans and boolean tokens.
    Boolean(BooleanValidator),
    /// Native strings.
    String(StringValidator),
    /// Integers, whole floats and integer strings.
    Integer(IntegerValidator),
    /// Finite numbers and numeric strings.
    Number(NumberValidator),
    /// Calendar dates.
    Date(DateValidator),
    /// Wall-clock times.
    Time(TimeValidator),
    /// Naive or offset datetimes.
    DateTime(DateTimeValidator),
    /// String-keyed mappings.
    Object(ObjectValidator),
}

/// Discriminant of a [`Validator`], matching the `type` tag of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    /// `"boolean"`
    Boolean,
    /// `"string"`
    String,
    /// `"integer"`
    Integer,
    /// `"number"`
    Number,
    /// `"date"`
    Date,
    /// `"time"`
    Time,
    /// `"datetime"`
    DateTime,
    /// `"object"`
    Object,
}

impl ValidatorKind {
    /// The definition `type` tag, e.g. `"datetime"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorKind::Boolean => "boolean",
            ValidatorKind::String => "string",
            ValidatorKind::Integer => "integer",
            ValidatorKind::Number => "number",
            ValidatorKind::Date => "date",
            ValidatorKind::Time => "time",
            ValidatorKind::DateTime => "datetime",
            ValidatorKind::Object => "object",
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Validator {
    /// An unconstrained boolean validator.
    pub fn boolean() -> Self {
        Validator::Boolean(BooleanValidator::default())
    }

    /// An unconstrained string validator. Blank strings are rejected.
    pub fn string() -> Self {
        Validator::String(StringValidator::default())
    }

    /// An unconstrained integer validator.
    pub fn integer() -> Self {
        Validator::Integer(IntegerValidator::default())
    }

    /// An unconstrained number validator.
    pub fn number() -> Self {
        Validator::Number(NumberValidator::default())
    }

    /// An unconstrained date validator.
    pub fn date() -> Self {
        Validator::Date(DateValidator::default())
    }

    /// An unconstrained time validator.
    pub fn time() -> Self {
        Validator::Time(TimeValidator::default())
    }

    /// An unconstrained datetime validator.
    pub fn datetime() -> Self {
        Validator::DateTime(DateTimeValidator::default())
    }

    /// An object validator that accepts any string-keyed mapping.
    pub fn object() -> Self {
        Validator::Object(ObjectValidator::default())
    }

    /// Validate and coerce `value`.
    ///
    /// With `strict` set, primitive coercions (numeric strings, boolean
    /// tokens, whole floats to integers) are disabled. Failures are always
    /// returned inside the result; this never panics on bad input.
    pub fn validate(&self, value: &Value, strict: bool) -> ValidationResult {
        match self {
            Validator::Boolean(v) => v.validate(value, strict),
            Validator::String(v) => v.validate(value, strict),
            Validator::Integer(v) => v.validate(value, strict),
            Validator::Number(v) => v.validate(value, strict),
            Validator::Date(v) => v.validate(value, strict),
            Validator::Time(v) => v.validate(value, strict),
            Validator::DateTime(v) => v.validate(value, strict),
            Validator::Object(v) => v.validate(value, strict),
        }
    }

    /// [`Validator::validate`] with coercion enabled.
    pub fn validate_lenient(&self, value: &Value) -> ValidationResult {
        self.validate(value, false)
    }

    /// Which kind of validator this is.
    pub fn kind(&self) -> ValidatorKind {
        match self {
            Validator::Boolean(_) => ValidatorKind::Boolean,
            Validator::String(_) => ValidatorKind::String,
            Validator::Integer(_) => ValidatorKind::Integer,
            Validator::Number(_) => ValidatorKind::Number,
            Validator::Date(_) => ValidatorKind::Date,
            Validator::Time(_) => ValidatorKind::Time,
            Validator::DateTime(_) => ValidatorKind::DateTime,
            Validator::Object(_) => ValidatorKind::Object,
        }
    }

    /// Whether null is accepted.
    pub fn allow_null(&self) -> bool {
        match self {
            Validator::Boolean(v) => v.allow_null(),
            Validator::String(v) => v.allow_null(),
            Validator::Integer(v) => v.allow_null(),
            Validator::Number(v) => v.allow_null(),
            Validator::Date(v) => v.allow_null(),
            Validator::Time(v) => v.allow_null(),
            Validator::DateTime(v) => v.allow_null(),
            Validator::Object(v) => v.allow_null(),
        }
    }

    /// The coerced default, injected by an enclosing object for absent keys.
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            Validator::Boolean(v) => v.default_value(),
            Validator::String(v) => v.default_value(),
            Validator::Integer(v) => v.default_value(),
            Validator::Number(v) => v.default_value(),
            Validator::Date(v) => v.default_value(),
            Validator::Time(v) => v.default_value(),
            Validator::DateTime(v) => v.default_value(),
            Validator::Object(v) => v.default_value(),
        }
    }

    /// Whether a default is configured.
    pub fn has_default(&self) -> bool {
        self.default_value().is_some()
    }
}

macro_rules! impl_into_validator {
    ($inner:ty, $variant:ident) => {
        impl From<$inner> for Validator {
            fn from(v: $inner) -> Self {
                Validator::$variant(v)
            }
        }
    };
}

impl_into_validator!(BooleanValidator, Boolean);
impl_into_validator!(StringValidator, String);
impl_into_validator!(IntegerValidator, Integer);
impl_into_validator!(NumberValidator, Number);
impl_into_validator!(DateValidator, Date);
impl_into_validator!(TimeValidator, Time);
impl_into_validator!(DateTimeValidator, DateTime);
impl_into_validator!(ObjectValidator, Object);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::BooleanOptions;
    use crate::object::ObjectOptions;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_validator_is_send_sync() {
        assert_send_sync::<Validator>();
    }

    #[test]
    fn test_dispatch_matches_inner() {
        let value = Value::from("123");
        assert_eq!(
            Validator::integer().validate(&value, false),
            IntegerValidator::default().validate(&value, false)
        );
        assert_eq!(Validator::integer().validate_lenient(&value).value(), Some(&Value::Integer(123)));
    }

    #[test]
    fn test_kind_and_defaults() {
        let v: Validator = BooleanValidator::new(BooleanOptions::default().with_default(true))
            .unwrap()
            .into();
        assert_eq!(v.kind(), ValidatorKind::Boolean);
        assert!(v.has_default());
        assert!(!v.allow_null());
        assert!(!Validator::string().has_default());
        assert_eq!(Validator::datetime().kind().to_string(), "datetime");
    }

    #[test]
    fn test_nested_object_path() {
        let inner = ObjectValidator::new(ObjectOptions::default().with_additional_properties(Validator::integer())).unwrap();
        let outer = ObjectValidator::new(ObjectOptions::default().with_additional_properties(Validator::from(inner))).unwrap();
        let raw = Value::object([("example", Value::object([("nested", "abc")]))]);
        let result = Validator::from(outer).validate(&raw, false);
        let errors = result.errors().unwrap();
        assert_eq!(errors.get(&["example", "nested"]).unwrap().text, "Must be a number.");
    }
}
