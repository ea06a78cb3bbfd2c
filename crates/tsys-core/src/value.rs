//! # Dynamic Values — the Untyped Input Model
//!
//! [`Value`] is what validators consume and produce: JSON-shaped data
//! extended with native dates, times and datetimes so that already-typed
//! values can be fed back through a validator unchanged.
//!
//! Objects are insertion-ordered ([`Map`]) and keyed by [`Key`], which is
//! not restricted to strings. Producers such as YAML loaders or hand-built
//! maps can carry integer or boolean keys; the object validator rejects
//! them with `invalid_key` instead of stringifying them.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Insertion-ordered mapping used for object values.
pub type Map = IndexMap<Key, Value>;

/// A mapping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A string key, the only kind an object schema accepts.
    String(String),
    /// An integer key.
    Integer(i64),
    /// A boolean key.
    Boolean(bool),
}

impl Key {
    /// The key as a string slice, if it is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            Key::Integer(_) | Key::Boolean(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(s) => f.write_str(s),
            Key::Integer(i) => write!(f, "{i}"),
            Key::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Integer(i)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Boolean(b)
    }
}

/// A datetime with or without a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeValue {
    /// No timezone designator was present.
    Naive(NaiveDateTime),
    /// A fixed UTC offset was present (`Z` is offset zero).
    Aware(DateTime<FixedOffset>),
}

impl DateTimeValue {
    /// Wall-clock date and time, ignoring any offset.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            DateTimeValue::Naive(naive) => *naive,
            DateTimeValue::Aware(aware) => aware.naive_local(),
        }
    }

    /// The UTC offset, if this value is timezone-aware.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            DateTimeValue::Naive(_) => None,
            DateTimeValue::Aware(aware) => Some(*aware.offset()),
        }
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeValue::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
            DateTimeValue::Aware(aware) => f.write_str(&aware.to_rfc3339()),
        }
    }
}

impl From<NaiveDateTime> for DateTimeValue {
    fn from(naive: NaiveDateTime) -> Self {
        DateTimeValue::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for DateTimeValue {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        DateTimeValue::Aware(aware)
    }
}

/// An untyped input value or a coerced output value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or explicit null.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number, possibly NaN or infinite.
    Float(f64),
    /// A string.
    String(String),
    /// A calendar date.
    Date(NaiveDate),
    /// A wall-clock time with microsecond precision.
    Time(NaiveTime),
    /// A datetime, naive or with an offset.
    DateTime(DateTimeValue),
    /// A sequence.
    Array(Vec<Value>),
    /// An insertion-ordered mapping.
    Object(Map),
}

impl Value {
    /// Build an object from `(key, value)` pairs, keeping their order.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::DateTime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Whether the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The number as `f64`, if this is an integer or a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The map, if this is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a string key in an object. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    /// The string keys of an object in order. Empty for non-objects.
    pub fn keys(&self) -> Vec<&str> {
        self.as_object()
            .map(|map| map.keys().filter_map(Key::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (Key::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date)
    }
}

impl From<NaiveTime> for Value {
    fn from(time: NaiveTime) -> Self {
        Value::Time(time)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(naive: NaiveDateTime) -> Self {
        Value::DateTime(DateTimeValue::Naive(naive))
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        Value::DateTime(DateTimeValue::Aware(aware))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_key_order() {
        let value = Value::from(json!({"b": 1, "a": 2}));
        assert_eq!(value.keys(), vec!["b", "a"]);

        let parsed: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        assert_eq!(parsed.keys(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from(json!(42)), Value::Integer(42));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn test_object_builder_and_get() {
        let value = Value::object([("x", Value::from(1)), ("y", Value::from("two"))]);
        assert_eq!(value.get("x"), Some(&Value::Integer(1)));
        assert_eq!(value.get("y").and_then(Value::as_str), Some("two"));
        assert_eq!(value.get("z"), None);
        assert_eq!(value.keys(), vec!["x", "y"]);
    }

    #[test]
    fn test_non_string_keys_are_kept() {
        let value = Value::object([(Key::Integer(1), Value::from(123))]);
        let map = value.as_object().unwrap();
        assert_eq!(map.keys().next(), Some(&Key::Integer(1)));
        assert!(value.keys().is_empty());
    }

    #[test]
    fn test_deserialize_via_json() {
        let value: Value = serde_json::from_str(r#"{"a": [true, null]}"#).unwrap();
        assert_eq!(
            value.get("a"),
            Some(&Value::Array(vec![Value::Bool(true), Value::Null]))
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_datetime_value_accessors() {
        let naive = NaiveDate::from_ymd_opt(2049, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let offset = FixedOffset::west_opt(2 * 3600 + 30 * 60).unwrap();
        let aware = naive.and_local_timezone(offset).unwrap();

        assert_eq!(DateTimeValue::Naive(naive).offset(), None);
        assert_eq!(DateTimeValue::Aware(aware).offset(), Some(offset));
        assert_eq!(DateTimeValue::Aware(aware).naive_local(), naive);
        assert_eq!(DateTimeValue::Aware(aware).to_string(), "2049-01-01T12:00:00-02:30");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Float(1.0).type_name(), "number");
        assert_eq!(Value::object(Vec::<(&str, Value)>::new()).type_name(), "object");
    }
}
