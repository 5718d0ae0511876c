//! Variable values handed to the template engine.
//!
//! Decoded YAML/JSON is converted into the [`Value`] tree below rather than
//! passed through as decoder-specific values, so the engine boundary only ever
//! sees strings, numbers, booleans, null, sequences and string-keyed mappings.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// String-keyed mapping that keeps document order.
pub type Mapping = IndexMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Number::PosInt(n) => serializer.serialize_u64(*n),
            Number::NegInt(n) => serializer.serialize_i64(*n),
            Number::Float(n) => serializer.serialize_f64(*n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Mapping(map) => serializer.collect_map(map),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        match u64::try_from(value) {
            Ok(n) => Value::Number(Number::PosInt(n)),
            Err(_) => Value::Number(Number::NegInt(value)),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

/// The top-level variables a template is rendered against.
///
/// Only ever read by the engine; a fresh context is built per invocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableContext {
    variables: Mapping,
}

impl VariableContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.variables.iter()
    }

    /// Converts a decoded YAML document into a context.
    ///
    /// A null document is an empty context. Any other non-mapping document is
    /// rejected. `source` names the document in error messages.
    pub fn from_yaml(document: serde_yaml::Value, source: &str) -> Result<Self> {
        match document {
            serde_yaml::Value::Null => Ok(Self::new()),
            serde_yaml::Value::Mapping(mapping) => Ok(Self {
                variables: convert_mapping(mapping, source)?,
            }),
            serde_yaml::Value::Tagged(tagged) => Self::from_yaml(tagged.value, source),
            other => Err(Error::not_a_mapping(source, describe(&other))),
        }
    }
}

impl From<Mapping> for VariableContext {
    fn from(variables: Mapping) -> Self {
        Self { variables }
    }
}

impl FromIterator<(String, Value)> for VariableContext {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            variables: iter.into_iter().collect(),
        }
    }
}

impl Serialize for VariableContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(&self.variables)
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(tagged) => describe(&tagged.value),
    }
}

fn convert_number(number: &serde_yaml::Number) -> Value {
    if let Some(n) = number.as_u64() {
        Value::Number(Number::PosInt(n))
    } else if let Some(n) = number.as_i64() {
        Value::Number(Number::NegInt(n))
    } else {
        match number.as_f64() {
            Some(n) => Value::Number(Number::Float(n)),
            None => Value::Null,
        }
    }
}

/// Scalar keys are stringified the way a YAML to JSON conversion would.
fn convert_key(key: serde_yaml::Value, source: &str) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => convert_key(tagged.value, source),
        other => Err(Error::unsupported_key(source, describe(&other))),
    }
}

fn convert_mapping(mapping: serde_yaml::Mapping, source: &str) -> Result<Mapping> {
    let mut converted = Mapping::with_capacity(mapping.len());

    for (key, value) in mapping {
        // Later entries win when two keys stringify to the same text.
        converted.insert(convert_key(key, source)?, convert_value(value, source)?);
    }

    Ok(converted)
}

fn convert_value(value: serde_yaml::Value, source: &str) -> Result<Value> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => convert_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| convert_value(item, source))
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => Value::Mapping(convert_mapping(mapping, source)?),
        serde_yaml::Value::Tagged(tagged) => convert_value(tagged.value, source)?,
    })
}
