//! Read, write and remove values at delimited paths.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::KeyPath;
use crate::result_ext::DecodeAtExt;
use crate::{DotpathError, DotpathResult, Key, Mapping, Value};

/// Path operations bound to a delimiter.
///
/// Reads never fail unless asked to: [`Self::get`] and [`Self::get_or`]
/// degrade to `None` or a default, [`Self::exists`] and [`Self::isset`]
/// to `false`, and [`Self::unset`] to a no-op. Only [`Self::try_get`] and
/// the write operations report errors.
///
/// ```rust
/// use dotpath::{Mapping, PathAccessor, Value};
///
/// let accessor = PathAccessor::with_delimiter("/")?;
/// let tree = accessor.set(Mapping::new(), "server/port", 8080)?;
/// assert_eq!(accessor.get(&tree, "server/port"), Some(&Value::Int(8080)));
/// assert!(accessor.get(&tree, "server.port").is_none());
/// # Ok::<_, std::sync::Arc<dotpath::DotpathError>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathAccessor {
    delimiter: String,
}

impl Default for PathAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PathAccessor {
    /// Delimiter used when none is configured.
    pub const DEFAULT_DELIMITER: &'static str = ".";

    /// Accessor splitting paths on `.`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiter: Self::DEFAULT_DELIMITER.to_owned(),
        }
    }

    /// Accessor splitting paths on `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`DotpathError::EmptyDelimiter`] when `delimiter` is empty.
    pub fn with_delimiter(delimiter: impl Into<String>) -> DotpathResult<Self> {
        let text = delimiter.into();
        if text.is_empty() {
            return Err(Arc::new(DotpathError::EmptyDelimiter));
        }
        Ok(Self { delimiter: text })
    }

    /// The configured delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Split `path` with this accessor's delimiter.
    #[must_use]
    pub fn parse(&self, path: &str) -> KeyPath {
        KeyPath::split(path, &self.delimiter)
    }

    /// Read the value at `path`.
    #[must_use]
    pub fn get<'a>(&self, mapping: &'a Mapping, path: &str) -> Option<&'a Value> {
        resolve(mapping, self.parse(path).keys()).ok()
    }

    /// Read the value at `path`, or `default` when any segment is missing.
    #[must_use]
    pub fn get_or<'a>(&self, mapping: &'a Mapping, path: &str, default: &'a Value) -> &'a Value {
        self.get(mapping, path).unwrap_or(default)
    }

    /// Read the value at `path`, failing on the first missing segment.
    ///
    /// A segment is also missing when its parent is a leaf rather than a
    /// mapping.
    ///
    /// # Errors
    ///
    /// Returns [`DotpathError::PathNotFound`] naming the missing segment.
    pub fn try_get<'a>(&self, mapping: &'a Mapping, path: &str) -> DotpathResult<&'a Value> {
        let key_path = self.parse(path);
        resolve(mapping, key_path.keys()).map_err(|depth| {
            Arc::new(DotpathError::path_not_found(
                key_path.segment(depth),
                key_path.as_str(),
            ))
        })
    }

    /// Read the value at `path` and deserialise it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DotpathError::PathNotFound`] when the path is missing and
    /// [`DotpathError::Decode`] when the value does not fit `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{Mapping, PathAccessor};
    /// use serde_json::json;
    ///
    /// let tree = Mapping::try_from(json!({"ports": [80, 443]}))?;
    /// let ports: Vec<u16> = PathAccessor::new().get_as(&tree, "ports")?;
    /// assert_eq!(ports, vec![80, 443]);
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, mapping: &Mapping, path: &str) -> DotpathResult<T> {
        let value = self.try_get(mapping, path)?.clone();
        serde_json::from_value(serde_json::Value::from(value)).decode_at(path)
    }

    /// Write `value` at `path` and return the updated mapping.
    ///
    /// # Errors
    ///
    /// See [`Self::set_in`].
    pub fn set(
        &self,
        mut mapping: Mapping,
        path: &str,
        value: impl Into<Value>,
    ) -> DotpathResult<Mapping> {
        self.set_in(&mut mapping, path, value)?;
        Ok(mapping)
    }

    /// Write `value` at `path` in place.
    ///
    /// Missing intermediate segments become empty mappings. The final segment
    /// is overwritten whatever it held. Nothing is modified when the write
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`DotpathError::PathConflict`] when an intermediate segment
    /// holds a value that is not a mapping. The error names the segment that
    /// could not be written and the prefix holding the blocking value.
    pub fn set_in(
        &self,
        mapping: &mut Mapping,
        path: &str,
        value: impl Into<Value>,
    ) -> DotpathResult<()> {
        let key_path = self.parse(path);
        write_at(mapping, &key_path, 0, value.into()).map_err(|depth| {
            let err = DotpathError::path_conflict(
                key_path.segment(depth + 1),
                key_path.prefix(depth + 1),
            );
            debug!(path = key_path.as_str(), error = %err, "rejected write through leaf");
            Arc::new(err)
        })
    }

    /// Remove the value at `path` and return the updated mapping.
    #[must_use]
    pub fn unset(&self, mut mapping: Mapping, path: &str) -> Mapping {
        self.unset_in(&mut mapping, path);
        mapping
    }

    /// Remove the value at `path` in place, returning it.
    ///
    /// Missing segments end the walk silently. Mappings left empty by the
    /// removal stay in place.
    pub fn unset_in(&self, mapping: &mut Mapping, path: &str) -> Option<Value> {
        remove_at(mapping, self.parse(path).keys())
    }

    /// Returns `true` when every segment of `path` is present, even if the
    /// final value is [`Value::Null`].
    #[must_use]
    pub fn exists(&self, mapping: &Mapping, path: &str) -> bool {
        self.get(mapping, path).is_some()
    }

    /// Returns `true` when `path` exists and its value is not [`Value::Null`].
    #[must_use]
    pub fn isset(&self, mapping: &Mapping, path: &str) -> bool {
        self.get(mapping, path).is_some_and(|value| !value.is_null())
    }
}

/// Walk `keys` from `mapping`, returning the depth of the first missing
/// segment on failure.
fn resolve<'a>(mapping: &'a Mapping, keys: &[Key]) -> Result<&'a Value, usize> {
    let mut cursor = Some(mapping);
    let mut resolved = None;
    for (depth, key) in keys.iter().enumerate() {
        let value = cursor.and_then(|map| map.get(key)).ok_or(depth)?;
        cursor = value.as_map();
        resolved = Some(value);
    }
    resolved.ok_or(0)
}

/// Recursive write. On failure returns the depth of the leaf that blocked
/// the descent; `mapping` is left untouched in that case.
fn write_at(
    mapping: &mut Mapping,
    path: &KeyPath,
    depth: usize,
    value: Value,
) -> Result<(), usize> {
    let Some(key) = path.keys().get(depth) else {
        return Ok(());
    };
    if depth + 1 == path.len() {
        mapping.insert(key.clone(), value);
        return Ok(());
    }
    match mapping.get_mut(key) {
        Some(Value::Map(child)) => write_at(child, path, depth + 1, value),
        Some(_) => Err(depth),
        None => {
            let mut child = Mapping::new();
            write_at(&mut child, path, depth + 1, value)?;
            mapping.insert(key.clone(), Value::Map(child));
            Ok(())
        }
    }
}

fn remove_at(mapping: &mut Mapping, keys: &[Key]) -> Option<Value> {
    let (head, rest) = keys.split_first()?;
    if rest.is_empty() {
        return mapping.remove(head);
    }
    mapping
        .get_mut(head)?
        .as_map_mut()
        .and_then(|child| remove_at(child, rest))
}
