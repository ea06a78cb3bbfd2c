//! # Declarative Definitions
//!
//! Builds a [`Validator`] graph from a JSON descriptor:
//!
//! ```json
//! {"type": "object",
//!  "required": ["id"],
//!  "properties": {"id": {"type": "integer", "minimum": 1}},
//!  "pattern_properties": {"^x-": {"type": "string"}},
//!  "additional_properties": false}
//! ```
//!
//! The `type` tag selects the validator kind; every other key must be one
//! of that kind's option names. `additional_properties` takes `true`
//! (keep), `false` (reject), `null` (drop) or a nested definition.
//!
//! Loading runs the same constructors as typed construction, so a
//! descriptor that parses may still fail with a conflict or a bad pattern.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::debug;
use tsys_core::{SchemaError, Value};

use crate::boolean::{BooleanOptions, BooleanValidator};
use crate::numeric::{IntegerOptions, IntegerValidator, NumberOptions, NumberValidator};
use crate::object::{AdditionalProperties, ObjectOptions, ObjectValidator};
use crate::string::{StringOptions, StringValidator};
use crate::temporal::{DateTimeValidator, DateValidator, TemporalOptions, TimeValidator};
use crate::validator::Validator;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Definition {
    Boolean(BooleanOptions),
    String(StringOptions),
    Integer(IntegerOptions),
    Number(NumberOptions),
    Date(TemporalOptions),
    Time(TemporalOptions),
    DateTime(TemporalOptions),
    Object(ObjectDefinition),
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ObjectDefinition {
    allow_null: bool,
    default: Option<Value>,
    required: Vec<String>,
    properties: IndexMap<String, Definition>,
    pattern_properties: IndexMap<String, Definition>,
    additional_properties: Json,
    min_properties: Option<usize>,
    max_properties: Option<usize>,
}

impl Default for ObjectDefinition {
    fn default() -> Self {
        Self {
            allow_null: false,
            default: None,
            required: Vec::new(),
            properties: IndexMap::new(),
            pattern_properties: IndexMap::new(),
            additional_properties: Json::Bool(true),
            min_properties: None,
            max_properties: None,
        }
    }
}

/// Build a validator from a parsed JSON descriptor.
///
/// # Errors
///
/// [`SchemaError::Definition`] for an unknown `type`, an unknown option
/// name or a mistyped option value; otherwise whatever the target
/// validator's constructor reports.
pub fn from_json(json: &Json) -> Result<Validator, SchemaError> {
    let definition = Definition::deserialize(json).map_err(|e| {
        debug!(error = %e, "rejected schema definition");
        SchemaError::from(e)
    })?;
    build(definition)
}

/// Parse a JSON descriptor from text and build a validator.
///
/// # Errors
///
/// As [`from_json`], plus [`SchemaError::Definition`] for malformed JSON.
pub fn from_str(text: &str) -> Result<Validator, SchemaError> {
    let definition: Definition = serde_json::from_str(text).map_err(|e| {
        debug!(error = %e, "rejected schema definition");
        SchemaError::from(e)
    })?;
    build(definition)
}

impl FromStr for Validator {
    type Err = SchemaError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        from_str(text)
    }
}

fn build(definition: Definition) -> Result<Validator, SchemaError> {
    let validator = match definition {
        Definition::Boolean(options) => BooleanValidator::new(options)?.into(),
        Definition::String(options) => StringValidator::new(options)?.into(),
        Definition::Integer(options) => IntegerValidator::new(options)?.into(),
        Definition::Number(options) => NumberValidator::new(options)?.into(),
        Definition::Date(options) => DateValidator::new(options)?.into(),
        Definition::Time(options) => TimeValidator::new(options)?.into(),
        Definition::DateTime(options) => DateTimeValidator::new(options)?.into(),
        Definition::Object(object) => build_object(object)?.into(),
    };
    Ok(validator)
}

fn build_object(definition: ObjectDefinition) -> Result<ObjectValidator, SchemaError> {
    let properties = build_all(definition.properties)?;
    let pattern_properties = build_all(definition.pattern_properties)?;
    let additional_properties = match definition.additional_properties {
        Json::Bool(allowed) => AdditionalProperties::from(allowed),
        Json::Null => AdditionalProperties::Dropped,
        nested @ Json::Object(_) => AdditionalProperties::from(from_json(&nested)?),
        other => {
            return Err(SchemaError::invalid_option(
                "additional_properties",
                format!("expected true, false, null or a definition, got {other}"),
            ))
        }
    };
    ObjectValidator::new(ObjectOptions {
        allow_null: definition.allow_null,
        default: definition.default,
        required: definition.required,
        properties,
        pattern_properties,
        additional_properties,
        min_properties: definition.min_properties,
        max_properties: definition.max_properties,
    })
    .map_err(|e| {
        debug!(error = %e, "object definition failed to build");
        e
    })
}

fn build_all(definitions: IndexMap<String, Definition>) -> Result<IndexMap<String, Validator>, SchemaError> {
    definitions
        .into_iter()
        .map(|(name, definition)| Ok((name, build(definition)?)))
        .collect()
}
