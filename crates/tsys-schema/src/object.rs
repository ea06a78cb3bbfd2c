//! Object validator.
//!
//! Validates a mapping key by key and merges every child failure into one
//! [`ErrorTree`] branch. A single bad child makes the whole object invalid;
//! there is no partial success.
//!
//! ## Dispatch
//!
//! Each input key is routed to the first rule that claims it:
//!
//! 1. an explicit entry in `properties`;
//! 2. the first `pattern_properties` regex that matches anywhere in the key;
//! 3. the [`AdditionalProperties`] policy.
//!
//! ## Ordering
//!
//! Output keys come in `properties` declaration order first (present or
//! defaulted), then the remaining accepted keys in input order. Errors come
//! as `required` first, then `properties` in declaration order, then the
//! remaining keys in input order.

use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, trace};
use tsys_core::{ErrorCode, ErrorMessage, ErrorTree, Key, Map, SchemaError, ValidationResult, Value};

use crate::common::{coerce_default, NULL_TEXT};
use crate::validator::Validator;

/// What to do with keys matched by neither `properties` nor `pattern_properties`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AdditionalProperties {
    /// Reject the key with `invalid_property`.
    Forbidden,
    /// Silently leave the key out of the output.
    Dropped,
    /// Copy the value into the output unvalidated.
    #[default]
    Permissive,
    /// Validate the value with this validator.
    Delegate(Box<Validator>),
}

impl From<bool> for AdditionalProperties {
    fn from(allowed: bool) -> Self {
        if allowed {
            AdditionalProperties::Permissive
        } else {
            AdditionalProperties::Forbidden
        }
    }
}

impl From<Validator> for AdditionalProperties {
    fn from(validator: Validator) -> Self {
        AdditionalProperties::Delegate(Box::new(validator))
    }
}

/// Options for [`ObjectValidator`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectOptions {
    /// Accept null.
    pub allow_null: bool,
    /// Value injected by an enclosing object when the key is absent.
    pub default: Option<Value>,
    /// Keys that must be present.
    pub required: Vec<String>,
    /// Validators for named keys, in declaration order.
    pub properties: IndexMap<String, Validator>,
    /// Validators for keys matching a regex, tried in declaration order.
    pub pattern_properties: IndexMap<String, Validator>,
    /// Policy for every other key.
    pub additional_properties: AdditionalProperties,
    /// Minimum number of keys.
    pub min_properties: Option<usize>,
    /// Maximum number of keys.
    pub max_properties: Option<usize>,
}

impl ObjectOptions {
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

    /// Require these keys.
    pub fn with_required<I, S>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(required.into_iter().map(Into::into));
        self
    }

    /// Add a named property.
    pub fn with_property(mut self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.properties.insert(name.into(), validator.into());
        self
    }

    /// Add a pattern property.
    pub fn with_pattern_property(mut self, pattern: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.pattern_properties.insert(pattern.into(), validator.into());
        self
    }

    /// Set the policy for unmatched keys.
    pub fn with_additional_properties(mut self, policy: impl Into<AdditionalProperties>) -> Self {
        self.additional_properties = policy.into();
        self
    }

    /// Set the minimum number of keys.
    pub fn with_min_properties(mut self, min_properties: usize) -> Self {
        self.min_properties = Some(min_properties);
        self
    }

    /// Set the maximum number of keys.
    pub fn with_max_properties(mut self, max_properties: usize) -> Self {
        self.max_properties = Some(max_properties);
        self
    }
}

/// A pattern property with its compiled, unanchored regex.
#[derive(Debug, Clone)]
struct PatternProperty {
    source: String,
    regex: Regex,
    validator: Validator,
}

impl PartialEq for PatternProperty {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.validator == other.validator
    }
}

/// Validates string-keyed mappings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValidator {
    allow_null: bool,
    default: Option<Value>,
    required: Vec<String>,
    properties: IndexMap<String, Validator>,
    pattern_properties: Vec<PatternProperty>,
    additional_properties: AdditionalProperties,
    min_properties: Option<usize>,
    max_properties: Option<usize>,
}

impl ObjectValidator {
    /// Build a validator from options.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::InvalidPattern`] if a `pattern_properties` key does
    ///   not compile.
    /// - [`SchemaError::ConflictingOptions`] if `min_properties > max_properties`.
    /// - [`SchemaError::InvalidOption`] if the default is rejected.
    pub fn new(options: ObjectOptions) -> Result<Self, SchemaError> {
        if let (Some(min), Some(max)) = (options.min_properties, options.max_properties) {
            if min > max {
                return Err(SchemaError::conflict(format!(
                    "min_properties ({min}) is greater than max_properties ({max})"
                )));
            }
        }
        let pattern_properties = options
            .pattern_properties
            .into_iter()
            .map(|(source, validator)| {
                let regex = Regex::new(&source).map_err(|e| SchemaError::InvalidPattern {
                    pattern: source.clone(),
                    reason: e.to_string(),
                })?;
                Ok(PatternProperty {
                    source,
                    regex,
                    validator,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        let mut validator = Self {
            allow_null: options.allow_null,
            default: None,
            required: options.required,
            properties: options.properties,
            pattern_properties,
            additional_properties: options.additional_properties,
            min_properties: options.min_properties,
            max_properties: options.max_properties,
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

    /// Validators for named keys, in declaration order.
    pub fn properties(&self) -> &IndexMap<String, Validator> {
        &self.properties
    }

    /// Keys that must be present.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// The policy for unmatched keys.
    pub fn additional_properties(&self) -> &AdditionalProperties {
        &self.additional_properties
    }

    /// Validate one raw value. `strict` is passed to every child.
    pub fn validate(&self, value: &Value, strict: bool) -> ValidationResult {
        let map = match value {
            Value::Null if self.allow_null => return ValidationResult::Valid(Value::Null),
            Value::Null => return self.fail(ErrorCode::Null),
            Value::Object(map) => map,
            _ => return self.fail(ErrorCode::Type),
        };

        let Some(input) = string_keyed(map) else {
            debug!("object has a non-string key");
            return self.fail(ErrorCode::InvalidKey);
        };

        if let Some(code) = self.check_cardinality(input.len()) {
            debug!(code = code.as_str(), keys = input.len(), "object cardinality rejected");
            return self.fail(code);
        }

        let mut output = Map::with_capacity(input.len());
        let mut errors: IndexMap<String, ErrorTree> = IndexMap::new();

        for name in &self.required {
            if !input.contains_key(name.as_str()) {
                errors
                    .entry(name.clone())
                    .or_insert_with(|| ErrorTree::leaf(ErrorMessage::new(ErrorCode::Required, "This field is required.")));
            }
        }

        for (name, child) in &self.properties {
            match input.get(name.as_str()) {
                Some(raw) => {
                    trace!(key = %name, kind = raw.type_name(), "validating declared property");
                    splice(name, child.validate(raw, strict), &mut output, &mut errors);
                }
                None => {
                    if let Some(default) = child.default_value() {
                        output.insert(Key::from(name.as_str()), default.clone());
                    }
                }
            }
        }

        for (&key, &raw) in &input {
            if self.properties.contains_key(key) {
                continue;
            }
            if let Some(pattern) = self.pattern_properties.iter().find(|p| p.regex.is_match(key)) {
                trace!(key, pattern = %pattern.source, kind = raw.type_name(), "validating pattern property");
                splice(key, pattern.validator.validate(raw, strict), &mut output, &mut errors);
                continue;
            }
            match &self.additional_properties {
                AdditionalProperties::Forbidden => {
                    trace!(key, "rejecting additional property");
                    errors.entry(key.to_string()).or_insert_with(|| {
                        ErrorTree::leaf(ErrorMessage::new(ErrorCode::InvalidProperty, "Invalid property name."))
                    });
                }
                AdditionalProperties::Dropped => {
                    trace!(key, "dropping additional property");
                }
                AdditionalProperties::Permissive => {
                    output.insert(Key::from(key), raw.clone());
                }
                AdditionalProperties::Delegate(child) => {
                    trace!(key, kind = raw.type_name(), "validating additional property");
                    splice(key, child.validate(raw, strict), &mut output, &mut errors);
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid(Value::Object(output))
        } else {
            debug!(failed = errors.len(), "object validation failed");
            ValidationResult::Invalid(ErrorTree::branch(errors))
        }
    }

    fn check_cardinality(&self, count: usize) -> Option<ErrorCode> {
        if let Some(min) = self.min_properties {
            if count < min {
                return Some(if min == 1 { ErrorCode::Empty } else { ErrorCode::MinProperties });
            }
        }
        if self.max_properties.is_some_and(|max| count > max) {
            return Some(ErrorCode::MaxProperties);
        }
        None
    }

    fn fail(&self, code: ErrorCode) -> ValidationResult {
        let text = match code {
            ErrorCode::Null => NULL_TEXT.to_string(),
            ErrorCode::InvalidKey => "Object keys must be strings.".to_string(),
            ErrorCode::Empty => "Must not be empty.".to_string(),
            ErrorCode::MinProperties => format!(
                "Must have at least {} properties.",
                self.min_properties.unwrap_or_default()
            ),
            ErrorCode::MaxProperties => format!(
                "Must have no more than {} properties.",
                self.max_properties.unwrap_or_default()
            ),
            _ => "Must be an object.".to_string(),
        };
        ValidationResult::failure(ErrorMessage::new(code, text))
    }
}

/// Borrow the map with `&str` keys, or `None` if any key is not a string.
fn string_keyed(map: &Map) -> Option<IndexMap<&str, &Value>> {
    map.iter()
        .map(|(key, value)| key.as_str().map(|k| (k, value)))
        .collect()
}

fn splice(key: &str, result: ValidationResult, output: &mut Map, errors: &mut IndexMap<String, ErrorTree>) {
    match result {
        ValidationResult::Valid(value) => {
            output.insert(Key::from(key), value);
        }
        ValidationResult::Invalid(tree) => {
            errors.entry(key.to_string()).or_insert(tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{IntegerOptions, IntegerValidator};
    use tsys_core::MessageStyle;
    use serde_json::json;

    fn object(options: ObjectOptions) -> ObjectValidator {
        ObjectValidator::new(options).unwrap()
    }

    fn input(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    fn code_map(result: &ValidationResult) -> serde_json::Value {
        result.errors().unwrap().to_mapping(MessageStyle::Code)
    }

    #[test]
    fn test_basic_shapes() {
        let v = ObjectValidator::default();
        assert_eq!(v.validate(&input(json!({})), false).value(), Some(&Value::Object(Map::new())));
        assert_eq!(v.validate(&Value::Null, false).codes(), vec!["null"]);
        assert_eq!(v.validate(&Value::Integer(123), false).codes(), vec!["type"]);
        let nullable = object(ObjectOptions::default().with_allow_null(true));
        assert_eq!(nullable.validate(&Value::Null, false).value(), Some(&Value::Null));
    }

    #[test]
    fn test_non_string_key() {
        let v = ObjectValidator::default();
        let raw = Value::object([(Key::Integer(1), Value::Integer(123))]);
        let result = v.validate(&raw, false);
        assert_eq!(result.codes(), vec!["invalid_key"]);
        assert_eq!(result.errors().unwrap().message().unwrap().text, "Object keys must be strings.");
    }

    #[test]
    fn test_cardinality() {
        let v = object(ObjectOptions::default().with_min_properties(1));
        assert_eq!(v.validate(&input(json!({})), false).codes(), vec!["empty"]);
        assert!(v.validate(&input(json!({"a": 1})), false).is_valid());

        let v = object(ObjectOptions::default().with_min_properties(2));
        assert_eq!(v.validate(&input(json!({})), false).codes(), vec!["min_properties"]);
        assert!(v.validate(&input(json!({"a": 1, "b": 2})), false).is_valid());

        let v = object(ObjectOptions::default().with_max_properties(2));
        assert!(v.validate(&input(json!({})), false).is_valid());
        assert_eq!(
            v.validate(&input(json!({"a": 1, "b": 2, "c": 3})), false).codes(),
            vec!["max_properties"]
        );
    }

    #[test]
    fn test_required() {
        let v = object(ObjectOptions::default().with_required(["example"]));
        assert_eq!(
            v.validate(&input(json!({"example": 123})), false).value(),
            Some(&input(json!({"example": 123})))
        );
        let result = v.validate(&input(json!({})), false);
        assert_eq!(code_map(&result), json!({"example": "required"}));
    }

    #[test]
    fn test_properties_and_defaults() {
        let v = object(ObjectOptions::default().with_property("example", Validator::integer()));
        assert_eq!(
            v.validate(&input(json!({"example": "123"})), false).value(),
            Some(&input(json!({"example": 123})))
        );
        let result = v.validate(&input(json!({"example": "abc"})), false);
        assert_eq!(code_map(&result), json!({"example": "type"}));

        let with_default = IntegerValidator::new(IntegerOptions::default().with_default(0)).unwrap();
        let v = object(ObjectOptions::default().with_property("example", with_default));
        assert_eq!(v.validate(&input(json!({})), false).value(), Some(&input(json!({"example": 0}))));
    }

    #[test]
    fn test_pattern_properties() {
        let v = object(ObjectOptions::default().with_pattern_property("^x-.*$", Validator::integer()));
        assert_eq!(
            v.validate(&input(json!({"x-example": "123"})), false).value(),
            Some(&input(json!({"x-example": 123})))
        );
        let result = v.validate(&input(json!({"x-example": "abc"})), false);
        assert_eq!(code_map(&result), json!({"x-example": "type"}));
    }

    #[test]
    fn test_pattern_properties_are_unanchored() {
        let v = object(
            ObjectOptions::default()
                .with_pattern_property("id", Validator::integer())
                .with_additional_properties(false),
        );
        assert_eq!(
            v.validate(&input(json!({"user_id_v2": "7"})), false).value(),
            Some(&input(json!({"user_id_v2": 7})))
        );
    }

    #[test]
    fn test_additional_policies() {
        let v = object(ObjectOptions::default().with_additional_properties(false));
        let result = v.validate(&input(json!({"example": "123"})), false);
        assert_eq!(code_map(&result), json!({"example": "invalid_property"}));

        let v = object(ObjectOptions::default().with_additional_properties(true));
        assert_eq!(
            v.validate(&input(json!({"example": "abc"})), false).value(),
            Some(&input(json!({"example": "abc"})))
        );

        let v = object(ObjectOptions::default().with_additional_properties(AdditionalProperties::Dropped));
        assert_eq!(v.validate(&input(json!({"example": "abc"})), false).value(), Some(&input(json!({}))));

        let v = object(ObjectOptions::default().with_additional_properties(Validator::integer()));
        assert_eq!(
            v.validate(&input(json!({"example": "123"})), false).value(),
            Some(&input(json!({"example": 123})))
        );
        let result = v.validate(&input(json!({"example": "abc"})), false);
        assert_eq!(code_map(&result), json!({"example": "type"}));
    }

    #[test]
    fn test_output_order_declared_first() {
        let v = object(
            ObjectOptions::default()
                .with_property("a", Validator::integer())
                .with_property("b", Validator::integer()),
        );
        let out = v.validate(&input(json!({"z": 0, "b": 2, "a": 1})), false).into_result().unwrap();
        assert_eq!(out.keys(), vec!["a", "b", "z"]);
    }

    #[test]
    fn test_error_order() {
        let v = object(
            ObjectOptions::default()
                .with_required(["must"])
                .with_property("a", Validator::integer())
                .with_property("b", Validator::integer())
                .with_additional_properties(false),
        );
        let result = v.validate(&input(json!({"extra": 1, "b": "x", "a": "y"})), false);
        let paths: Vec<String> = result.errors().unwrap().iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(paths, vec!["must", "a", "b", "extra"]);
    }

    #[test]
    fn test_strict_is_propagated() {
        let v = object(ObjectOptions::default().with_property("n", Validator::integer()));
        let raw = input(json!({"n": "5"}));
        assert!(v.validate(&raw, false).is_valid());
        assert_eq!(code_map(&v.validate(&raw, true)), json!({"n": "type"}));
    }

    #[test]
    fn test_construction_errors() {
        let err = ObjectValidator::new(ObjectOptions::default().with_min_properties(3).with_max_properties(1))
            .unwrap_err();
        assert!(matches!(err, SchemaError::ConflictingOptions { .. }));
        let err = ObjectValidator::new(ObjectOptions::default().with_pattern_property("(", Validator::integer()))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPattern { .. }));
    }
}
