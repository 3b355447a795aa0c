//! Builders for mappings used as test inputs.

use anyhow::{Context, Result};
use dotpath::{Mapping, Value};

/// Convert a JSON object or array into a [`Mapping`].
///
/// # Errors
///
/// Returns an error when `json` is a scalar.
pub fn mapping(json: serde_json::Value) -> Result<Mapping> {
    Mapping::try_from(json).context("test input must be a JSON object or array")
}

/// Convert each JSON literal into a merge argument.
#[must_use]
pub fn values<I>(inputs: I) -> Vec<Value>
where
    I: IntoIterator<Item = serde_json::Value>,
{
    inputs.into_iter().map(Value::from).collect()
}
