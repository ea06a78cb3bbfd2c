//! Integer and number validators.
//!
//! Both share the same skeleton: null check, coercion, then range,
//! `multiple_of` and `enum`/`exact` in that order.
//!
//! ## Coercion
//!
//! Booleans are rejected with `type` before anything else looks at the
//! value. Outside strict mode, numeric strings are parsed and (for
//! integers) floats with no fractional part are narrowed. A float that can
//! never be an integer (fractional, NaN, infinite) reports `integer`; a
//! number that is NaN or infinite reports `finite`.

use std::fmt;

use serde::Deserialize;
use tsys_core::{ErrorCode, ErrorMessage, SchemaError, ValidationResult, Value};

use crate::common::{coerce_default, Choices, NULL_TEXT};

/// Inclusive and exclusive bounds shared by both numeric validators.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Bounds<T> {
    minimum: Option<T>,
    maximum: Option<T>,
    exclusive_minimum: Option<T>,
    exclusive_maximum: Option<T>,
}

impl<T: PartialOrd + Copy + fmt::Display> Bounds<T> {
    fn new(
        minimum: Option<T>,
        maximum: Option<T>,
        exclusive_minimum: Option<T>,
        exclusive_maximum: Option<T>,
    ) -> Result<Self, SchemaError> {
        let lower = [("minimum", minimum), ("exclusive_minimum", exclusive_minimum)];
        let upper = [("maximum", maximum), ("exclusive_maximum", exclusive_maximum)];
        for (lower_name, lower_value) in lower {
            for (upper_name, upper_value) in upper {
                if let (Some(lo), Some(hi)) = (lower_value, upper_value) {
                    if lo > hi {
                        return Err(SchemaError::conflict(format!(
                            "{lower_name} ({lo}) is greater than {upper_name} ({hi})"
                        )));
                    }
                }
            }
        }
        Ok(Self {
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
        })
    }

    fn check(&self, value: T) -> Option<ErrorCode> {
        if self.minimum.is_some_and(|min| value < min) {
            return Some(ErrorCode::Minimum);
        }
        if self.exclusive_minimum.is_some_and(|min| value <= min) {
            return Some(ErrorCode::ExclusiveMinimum);
        }
        if self.maximum.is_some_and(|max| value > max) {
            return Some(ErrorCode::Maximum);
        }
        if self.exclusive_maximum.is_some_and(|max| value >= max) {
            return Some(ErrorCode::ExclusiveMaximum);
        }
        None
    }

    fn text(&self, code: ErrorCode) -> Option<String> {
        let text = match code {
            ErrorCode::Minimum => format!("Must be greater than or equal to {}.", self.minimum?),
            ErrorCode::ExclusiveMinimum => format!("Must be greater than {}.", self.exclusive_minimum?),
            ErrorCode::Maximum => format!("Must be less than or equal to {}.", self.maximum?),
            ErrorCode::ExclusiveMaximum => format!("Must be less than {}.", self.exclusive_maximum?),
            _ => return None,
        };
        Some(text)
    }
}

fn numeric_text<T: PartialOrd + Copy + fmt::Display + fmt::Debug + PartialEq>(
    code: ErrorCode,
    bounds: &Bounds<T>,
    multiple_of: Option<T>,
    choices: &Choices<T>,
) -> String {
    if let Some(text) = bounds.text(code) {
        return text;
    }
    match code {
        ErrorCode::Null => NULL_TEXT.to_string(),
        ErrorCode::Integer => "Must be an integer.".to_string(),
        ErrorCode::Finite => "Must be finite.".to_string(),
        ErrorCode::MultipleOf => match multiple_of {
            Some(m) => format!("Must be a multiple of {m}."),
            None => "Must be a multiple.".to_string(),
        },
        ErrorCode::Enum => format!("Must be one of {}.", choices.describe()),
        ErrorCode::Exact => format!("Must be {}.", choices.describe()),
        _ => "Must be a number.".to_string(),
    }
}

/// Narrow a whole float into `i64`, if it is in range.
fn narrow_to_i64(f: f64) -> Option<i64> {
    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63.
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Options for [`IntegerValidator`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntegerOptions {
    /// Accept null.
    pub allow_null: bool,
    /// Value injected by an enclosing object when the key is absent.
    pub default: Option<Value>,
    /// Inclusive lower bound.
    pub minimum: Option<i64>,
    /// Inclusive upper bound.
    pub maximum: Option<i64>,
    /// Exclusive lower bound.
    pub exclusive_minimum: Option<i64>,
    /// Exclusive upper bound.
    pub exclusive_maximum: Option<i64>,
    /// Allowed values.
    #[serde(rename = "enum")]
    pub choices: Option<Vec<i64>>,
    /// The single allowed value.
    pub exact: Option<i64>,
    /// Value must be divisible by this. Must be positive.
    pub multiple_of: Option<i64>,
}

impl IntegerOptions {
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

    /// Set the inclusive lower bound.
    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the inclusive upper bound.
    pub fn with_maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set the exclusive lower bound.
    pub fn with_exclusive_minimum(mut self, exclusive_minimum: i64) -> Self {
        self.exclusive_minimum = Some(exclusive_minimum);
        self
    }

    /// Set the exclusive upper bound.
    pub fn with_exclusive_maximum(mut self, exclusive_maximum: i64) -> Self {
        self.exclusive_maximum = Some(exclusive_maximum);
        self
    }

    /// Restrict to a set of values.
    pub fn with_enum(mut self, choices: impl IntoIterator<Item = i64>) -> Self {
        self.choices = Some(choices.into_iter().collect());
        self
    }

    /// Restrict to exactly one value.
    pub fn with_exact(mut self, exact: i64) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Require divisibility.
    pub fn with_multiple_of(mut self, multiple_of: i64) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }
}

/// Validates and coerces integers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerValidator {
    allow_null: bool,
    default: Option<Value>,
    bounds: Bounds<i64>,
    multiple_of: Option<i64>,
    choices: Choices<i64>,
}

impl IntegerValidator {
    /// Build a validator from options.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::ConflictingOptions`] if a lower bound exceeds an
    ///   upper bound, or both `enum` and `exact` are set.
    /// - [`SchemaError::InvalidOption`] if `multiple_of` is not positive,
    ///   `enum` is empty, or the default is rejected.
    pub fn new(options: IntegerOptions) -> Result<Self, SchemaError> {
        if let Some(m) = options.multiple_of {
            if m <= 0 {
                return Err(SchemaError::invalid_option("multiple_of", format!("must be positive, got {m}")));
            }
        }
        let mut validator = Self {
            allow_null: options.allow_null,
            default: None,
            bounds: Bounds::new(
                options.minimum,
                options.maximum,
                options.exclusive_minimum,
                options.exclusive_maximum,
            )?,
            multiple_of: options.multiple_of,
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
    pub fn validate(&self, value: &Value, strict: bool) -> ValidationResult {
        if value.is_null() {
            return if self.allow_null {
                ValidationResult::Valid(Value::Null)
            } else {
                self.fail(ErrorCode::Null)
            };
        }
        let n = match coerce_integer(value, strict) {
            Ok(n) => n,
            Err(code) => return self.fail(code),
        };
        if let Some(code) = self.check(n) {
            return self.fail(code);
        }
        ValidationResult::Valid(Value::Integer(n))
    }

    fn check(&self, n: i64) -> Option<ErrorCode> {
        self.bounds
            .check(n)
            .or_else(|| {
                self.multiple_of
                    .filter(|m| n % m != 0)
                    .map(|_| ErrorCode::MultipleOf)
            })
            .or_else(|| self.choices.check(&n))
    }

    fn fail(&self, code: ErrorCode) -> ValidationResult {
        let text = numeric_text(code, &self.bounds, self.multiple_of, &self.choices);
        ValidationResult::failure(ErrorMessage::new(code, text))
    }
}

fn coerce_integer(value: &Value, strict: bool) -> Result<i64, ErrorCode> {
    match value {
        // Booleans are not integers here, whatever the input format thinks.
        Value::Bool(_) => Err(ErrorCode::Type),
        Value::Integer(n) => Ok(*n),
        Value::Float(f) if !f.is_finite() || f.fract() != 0.0 => Err(ErrorCode::Integer),
        Value::Float(_) if strict => Err(ErrorCode::Type),
        Value::Float(f) => narrow_to_i64(*f).ok_or(ErrorCode::Integer),
        Value::String(s) if !strict => s.trim().parse::<i64>().map_err(|_| ErrorCode::Type),
        _ => Err(ErrorCode::Type),
    }
}

/// Options for [`NumberValidator`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberOptions {
    /// Accept null.
    pub allow_null: bool,
    /// Value injected by an enclosing object when the key is absent.
    pub default: Option<Value>,
    /// Inclusive lower bound.
    pub minimum: Option<f64>,
    /// Inclusive upper bound.
    pub maximum: Option<f64>,
    /// Exclusive lower bound.
    pub exclusive_minimum: Option<f64>,
    /// Exclusive upper bound.
    pub exclusive_maximum: Option<f64>,
    /// Allowed values.
    #[serde(rename = "enum")]
    pub choices: Option<Vec<f64>>,
    /// The single allowed value.
    pub exact: Option<f64>,
    /// Value divided by this must have no fractional part. Must be positive.
    pub multiple_of: Option<f64>,
}

impl NumberOptions {
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

    /// Set the inclusive lower bound.
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the inclusive upper bound.
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set the exclusive lower bound.
    pub fn with_exclusive_minimum(mut self, exclusive_minimum: f64) -> Self {
        self.exclusive_minimum = Some(exclusive_minimum);
        self
    }

    /// Set the exclusive upper bound.
    pub fn with_exclusive_maximum(mut self, exclusive_maximum: f64) -> Self {
        self.exclusive_maximum = Some(exclusive_maximum);
        self
    }

    /// Restrict to a set of values.
    pub fn with_enum(mut self, choices: impl IntoIterator<Item = f64>) -> Self {
        self.choices = Some(choices.into_iter().collect());
        self
    }

    /// Restrict to exactly one value.
    pub fn with_exact(mut self, exact: f64) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Require divisibility.
    pub fn with_multiple_of(mut self, multiple_of: f64) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }
}

/// Validates and coerces finite floating-point numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberValidator {
    allow_null: bool,
    default: Option<Value>,
    bounds: Bounds<f64>,
    multiple_of: Option<f64>,
    choices: Choices<f64>,
}

impl NumberValidator {
    /// Build a validator from options.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::ConflictingOptions`] if a lower bound exceeds an
    ///   upper bound, or both `enum` and `exact` are set.
    /// - [`SchemaError::InvalidOption`] if a bound is not finite,
    ///   `multiple_of` is not a positive finite number, `enum` is empty, or
    ///   the default is rejected.
    pub fn new(options: NumberOptions) -> Result<Self, SchemaError> {
        let named_bounds = [
            ("minimum", options.minimum),
            ("maximum", options.maximum),
            ("exclusive_minimum", options.exclusive_minimum),
            ("exclusive_maximum", options.exclusive_maximum),
        ];
        for (name, bound) in named_bounds {
            if bound.is_some_and(|b| !b.is_finite()) {
                return Err(SchemaError::invalid_option(name, "must be finite"));
            }
        }
        if let Some(m) = options.multiple_of {
            if !m.is_finite() || m <= 0.0 {
                return Err(SchemaError::invalid_option(
                    "multiple_of",
                    format!("must be a positive finite number, got {m}"),
                ));
            }
        }
        let mut validator = Self {
            allow_null: options.allow_null,
            default: None,
            bounds: Bounds::new(
                options.minimum,
                options.maximum,
                options.exclusive_minimum,
                options.exclusive_maximum,
            )?,
            multiple_of: options.multiple_of,
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
    pub fn validate(&self, value: &Value, strict: bool) -> ValidationResult {
        if value.is_null() {
            return if self.allow_null {
                ValidationResult::Valid(Value::Null)
            } else {
                self.fail(ErrorCode::Null)
            };
        }
        let n = match coerce_number(value, strict) {
            Ok(n) => n,
            Err(code) => return self.fail(code),
        };
        if !n.is_finite() {
            return self.fail(ErrorCode::Finite);
        }
        if let Some(code) = self.check(n) {
            return self.fail(code);
        }
        ValidationResult::Valid(Value::Float(n))
    }

    fn check(&self, n: f64) -> Option<ErrorCode> {
        self.bounds
            .check(n)
            .or_else(|| {
                self.multiple_of
                    .filter(|m| (n / m).fract() != 0.0)
                    .map(|_| ErrorCode::MultipleOf)
            })
            .or_else(|| self.choices.check(&n))
    }

    fn fail(&self, code: ErrorCode) -> ValidationResult {
        let text = numeric_text(code, &self.bounds, self.multiple_of, &self.choices);
        ValidationResult::failure(ErrorMessage::new(code, text))
    }
}

fn coerce_number(value: &Value, strict: bool) -> Result<f64, ErrorCode> {
    match value {
        Value::Bool(_) => Err(ErrorCode::Type),
        Value::Integer(n) => Ok(*n as f64),
        Value::Float(f) => Ok(*f),
        Value::String(s) if !strict => s.trim().parse::<f64>().map_err(|_| ErrorCode::Type),
        _ => Err(ErrorCode::Type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer(options: IntegerOptions) -> IntegerValidator {
        IntegerValidator::new(options).unwrap()
    }

    fn number(options: NumberOptions) -> NumberValidator {
        NumberValidator::new(options).unwrap()
    }

    // ---- Integer coercion ----

    #[test]
    fn test_integer_coercion() {
        let v = IntegerValidator::default();
        assert_eq!(v.validate(&Value::Integer(123), false).value(), Some(&Value::Integer(123)));
        assert_eq!(v.validate(&Value::from("123"), false).value(), Some(&Value::Integer(123)));
        assert_eq!(v.validate(&Value::Float(123.0), false).value(), Some(&Value::Integer(123)));
    }

    #[test]
    fn test_integer_rejections() {
        let v = IntegerValidator::default();
        assert_eq!(v.validate(&Value::Null, false).codes(), vec!["null"]);
        assert_eq!(v.validate(&Value::from("abc"), false).codes(), vec!["type"]);
        assert_eq!(v.validate(&Value::Bool(true), false).codes(), vec!["type"]);
        assert_eq!(v.validate(&Value::Float(123.1), false).codes(), vec!["integer"]);
        assert_eq!(v.validate(&Value::Float(f64::INFINITY), false).codes(), vec!["integer"]);
        assert_eq!(v.validate(&Value::Float(f64::NAN), false).codes(), vec!["integer"]);
        assert_eq!(v.validate(&Value::Float(1e300), false).codes(), vec!["integer"]);
        assert_eq!(v.validate(&Value::from("123.5"), false).codes(), vec!["type"]);
    }

    #[test]
    fn test_integer_strict() {
        let v = IntegerValidator::default();
        assert_eq!(v.validate(&Value::from("123"), true).codes(), vec!["type"]);
        assert_eq!(v.validate(&Value::Float(123.0), true).codes(), vec!["type"]);
        assert_eq!(v.validate(&Value::Bool(false), true).codes(), vec!["type"]);
        assert!(v.validate(&Value::Integer(7), true).is_valid());
    }

    #[test]
    fn test_integer_allow_null() {
        let v = integer(IntegerOptions::default().with_allow_null(true));
        assert_eq!(v.validate(&Value::Null, false).value(), Some(&Value::Null));
    }

    // ---- Integer constraints ----

    #[test]
    fn test_integer_bounds() {
        let v = integer(IntegerOptions::default().with_maximum(10));
        assert_eq!(v.validate(&Value::Integer(100), false).codes(), vec!["maximum"]);
        assert_eq!(v.validate(&Value::Integer(10), false).value(), Some(&Value::Integer(10)));

        let v = integer(IntegerOptions::default().with_minimum(3));
        assert_eq!(v.validate(&Value::Integer(1), false).codes(), vec!["minimum"]);
        assert_eq!(v.validate(&Value::Integer(3), false).value(), Some(&Value::Integer(3)));

        let v = integer(IntegerOptions::default().with_exclusive_maximum(10));
        assert_eq!(v.validate(&Value::Integer(10), false).codes(), vec!["exclusive_maximum"]);

        let v = integer(IntegerOptions::default().with_exclusive_minimum(3));
        assert_eq!(v.validate(&Value::Integer(3), false).codes(), vec!["exclusive_minimum"]);
    }

    #[test]
    fn test_integer_choices_and_multiple() {
        let v = integer(IntegerOptions::default().with_enum([1, 2, 3]));
        assert_eq!(v.validate(&Value::Integer(5), false).codes(), vec!["enum"]);

        let v = integer(IntegerOptions::default().with_enum([123]));
        assert_eq!(v.validate(&Value::Integer(5), false).codes(), vec!["exact"]);

        let v = integer(IntegerOptions::default().with_exact(123));
        assert_eq!(v.validate(&Value::Integer(5), false).codes(), vec!["exact"]);

        let v = integer(IntegerOptions::default().with_multiple_of(10));
        assert_eq!(v.validate(&Value::Integer(5), false).codes(), vec!["multiple_of"]);
        assert!(v.validate(&Value::Integer(-20), false).is_valid());
    }

    #[test]
    fn test_range_checked_before_multiple_and_choices() {
        let v = integer(
            IntegerOptions::default()
                .with_maximum(10)
                .with_multiple_of(3)
                .with_enum([1, 2]),
        );
        assert_eq!(v.validate(&Value::Integer(11), false).codes(), vec!["maximum"]);
        assert_eq!(v.validate(&Value::Integer(4), false).codes(), vec!["multiple_of"]);
        assert_eq!(v.validate(&Value::Integer(6), false).codes(), vec!["enum"]);
    }

    #[test]
    fn test_integer_messages() {
        let result = IntegerValidator::default().validate(&Value::from("abc"), false);
        assert_eq!(result.errors().unwrap().message().unwrap().text, "Must be a number.");

        let v = integer(IntegerOptions::default().with_minimum(3));
        let result = v.validate(&Value::Integer(1), false);
        assert_eq!(
            result.errors().unwrap().message().unwrap().text,
            "Must be greater than or equal to 3."
        );
    }

    #[test]
    fn test_integer_construction_errors() {
        let err = IntegerValidator::new(IntegerOptions::default().with_minimum(5).with_maximum(1)).unwrap_err();
        assert!(matches!(err, SchemaError::ConflictingOptions { .. }));
        let err = IntegerValidator::new(IntegerOptions::default().with_multiple_of(0)).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidOption { .. }));
        let err = IntegerValidator::new(IntegerOptions::default().with_default("abc")).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidOption { .. }));
    }

    // ---- Number ----

    #[test]
    fn test_number_coercion() {
        let v = NumberValidator::default();
        assert_eq!(v.validate(&Value::Float(123.1), false).value(), Some(&Value::Float(123.1)));
        assert_eq!(v.validate(&Value::Integer(123), false).value(), Some(&Value::Float(123.0)));
        assert_eq!(v.validate(&Value::from("123.1"), false).value(), Some(&Value::Float(123.1)));
    }

    #[test]
    fn test_number_rejections() {
        let v = NumberValidator::default();
        assert_eq!(v.validate(&Value::Null, false).codes(), vec!["null"]);
        assert_eq!(v.validate(&Value::from("abc"), false).codes(), vec!["type"]);
        assert_eq!(v.validate(&Value::Bool(true), false).codes(), vec!["type"]);
        assert_eq!(v.validate(&Value::Float(f64::INFINITY), false).codes(), vec!["finite"]);
        assert_eq!(v.validate(&Value::Float(f64::NAN), false).codes(), vec!["finite"]);
        assert_eq!(v.validate(&Value::from("inf"), false).codes(), vec!["finite"]);
        assert_eq!(v.validate(&Value::from("123"), true).codes(), vec!["type"]);
    }

    #[test]
    fn test_number_strict_accepts_native_numbers() {
        let v = NumberValidator::default();
        assert_eq!(v.validate(&Value::Integer(2), true).value(), Some(&Value::Float(2.0)));
        assert_eq!(v.validate(&Value::Float(f64::NEG_INFINITY), true).codes(), vec!["finite"]);
    }

    #[test]
    fn test_number_constraints() {
        let v = number(NumberOptions::default().with_maximum(10.0));
        assert_eq!(v.validate(&Value::Float(100.0), false).codes(), vec!["maximum"]);
        assert_eq!(v.validate(&Value::Float(10.0), false).value(), Some(&Value::Float(10.0)));

        let v = number(NumberOptions::default().with_minimum(3.0));
        assert_eq!(v.validate(&Value::Float(1.0), false).codes(), vec!["minimum"]);

        let v = number(NumberOptions::default().with_exclusive_maximum(10.0));
        assert_eq!(v.validate(&Value::Float(10.0), false).codes(), vec!["exclusive_maximum"]);

        let v = number(NumberOptions::default().with_exclusive_minimum(3.0));
        assert_eq!(v.validate(&Value::Float(3.0), false).codes(), vec!["exclusive_minimum"]);

        let v = number(NumberOptions::default().with_enum([1.0, 2.0, 3.0]));
        assert_eq!(v.validate(&Value::Float(5.0), false).codes(), vec!["enum"]);

        let v = number(NumberOptions::default().with_enum([123.0]));
        assert_eq!(v.validate(&Value::Float(5.0), false).codes(), vec!["exact"]);

        let v = number(NumberOptions::default().with_exact(123.0));
        assert_eq!(v.validate(&Value::Float(5.0), false).codes(), vec!["exact"]);

        let v = number(NumberOptions::default().with_multiple_of(10.0));
        assert_eq!(v.validate(&Value::Float(5.0), false).codes(), vec!["multiple_of"]);
        assert!(v.validate(&Value::Float(30.0), false).is_valid());
    }

    #[test]
    fn test_number_construction_errors() {
        let err = NumberValidator::new(NumberOptions::default().with_minimum(f64::NAN)).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidOption { .. }));
        let err = NumberValidator::new(NumberOptions::default().with_multiple_of(-1.0)).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidOption { .. }));
        let err = NumberValidator::new(
            NumberOptions::default()
                .with_exclusive_minimum(5.0)
                .with_maximum(1.0),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::ConflictingOptions { .. }));
    }

    #[test]
    fn test_narrow_to_i64_limits() {
        assert_eq!(narrow_to_i64(-9_223_372_036_854_775_808.0), Some(i64::MIN));
        assert_eq!(narrow_to_i64(9_223_372_036_854_775_808.0), None);
        assert_eq!(narrow_to_i64(42.0), Some(42));
    }
}
