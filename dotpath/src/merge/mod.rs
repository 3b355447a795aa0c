//! Deep merging of nested mappings.
//!
//! Inputs fold left to right into an empty accumulator:
//!
//! - positional entries ([`Key::Index`]) are appended under the next free
//!   index, so positions from every input are concatenated;
//! - associative entries ([`Key::Name`]) overwrite, except when both the
//!   accumulated and the incoming value are mappings, which merge
//!   recursively.
//!
//! ```rust
//! use dotpath::{Mapping, Value, merge};
//! use serde_json::json;
//!
//! let merged = merge([
//!     Value::from(json!({"tags": ["a"], "db": {"host": "localhost"}})),
//!     Value::from(json!({"tags": ["b"], "db": {"port": 5432}})),
//! ])?;
//! assert_eq!(
//!     merged,
//!     Mapping::try_from(json!({
//!         "tags": ["a", "b"],
//!         "db": {"host": "localhost", "port": 5432},
//!     }))?
//! );
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use crate::{DotpathError, DotpathResult, Key, Mapping, Value};

/// Merge every input into a new mapping.
///
/// All arguments are validated before any merging happens. Zero arguments
/// produce an empty mapping.
///
/// # Errors
///
/// Returns [`DotpathError::InvalidInput`] naming the one-based position of a
/// non-mapping argument. When several arguments are invalid the result is a
/// [`DotpathError::Aggregate`] listing each of them in order.
pub fn merge<I>(inputs: I) -> DotpathResult<Mapping>
where
    I: IntoIterator<Item = Value>,
{
    let mut mappings = Vec::new();
    let mut errors = Vec::new();
    for (position, value) in inputs.into_iter().enumerate() {
        match value {
            Value::Map(mapping) => mappings.push(mapping),
            other => errors.push(DotpathError::invalid_input_arc(position + 1, other.kind())),
        }
    }
    if let Some(err) = DotpathError::try_aggregate(errors) {
        debug!(error = %err, "rejected merge arguments");
        return Err(Arc::new(err));
    }
    Ok(merge_mappings(mappings))
}

/// Merge already-validated mappings into a new mapping.
#[must_use]
pub fn merge_mappings<I>(inputs: I) -> Mapping
where
    I: IntoIterator<Item = Mapping>,
{
    let mut result = Mapping::new();
    for (position, layer) in inputs.into_iter().enumerate() {
        trace!(argument = position + 1, entries = layer.len(), "folding merge input");
        merge_into(&mut result, layer);
    }
    result
}

/// Fold `layer` into `target`.
///
/// ```rust
/// use dotpath::{Key, Mapping, Value, merge_into};
///
/// let mut acc: Mapping = [Value::from("a")].into_iter().collect();
/// merge_into(&mut acc, [Value::from("b")].into_iter().collect());
/// assert_eq!(acc.get(&Key::Index(1)), Some(&Value::from("b")));
/// ```
pub fn merge_into(target: &mut Mapping, layer: Mapping) {
    for (key, value) in layer {
        match key {
            Key::Index(_) => {
                target.push(value);
            }
            Key::Name(_) => merge_named(target, key, value),
        }
    }
}

fn merge_named(target: &mut Mapping, key: Key, value: Value) {
    match value {
        Value::Map(incoming) => match target.get_mut(&key) {
            Some(Value::Map(existing)) => {
                let accumulated = std::mem::take(existing);
                *existing = merge_mappings([accumulated, incoming]);
            }
            _ => {
                target.insert(key, Value::Map(incoming));
            }
        },
        scalar => {
            target.insert(key, scalar);
        }
    }
}
