//! Conversions between the value model and `serde_json`.

use serde_json::{Map as JsonMap, Number, Value as Json};

use super::{Key, Mapping, Value};
use crate::DotpathError;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => number_to_value(&n),
            Json::String(text) => Self::String(text),
            Json::Array(items) => Self::Map(items.into_iter().map(Self::from).collect()),
            Json::Object(object) => Self::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (Key::from(key), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

fn number_to_value(n: &Number) -> Value {
    n.as_i64().map_or_else(
        || n.as_f64().map_or(Value::Null, Value::Float),
        Value::Int,
    )
}

/// Non-finite floats have no JSON form and become `null`.
impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Int(n) => Self::Number(n.into()),
            Value::Float(f) => Number::from_f64(f).map_or(Self::Null, Self::Number),
            Value::String(text) => Self::String(text),
            Value::Map(mapping) => mapping.into(),
        }
    }
}

impl From<Mapping> for Json {
    fn from(mapping: Mapping) -> Self {
        if mapping.is_list() {
            Self::Array(mapping.into_iter().map(|(_, v)| v.into()).collect())
        } else {
            Self::Object(
                mapping
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.into()))
                    .collect::<JsonMap<String, Self>>(),
            )
        }
    }
}

impl TryFrom<Json> for Mapping {
    type Error = DotpathError;

    /// Objects and arrays convert; scalars are rejected.
    fn try_from(json: Json) -> Result<Self, Self::Error> {
        match Value::from(json) {
            Value::Map(mapping) => Ok(mapping),
            other => Err(DotpathError::decode(
                "json",
                format_args!("expected a mapping, found {}", other.kind()),
            )),
        }
    }
}
