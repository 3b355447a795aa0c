//! Delimited paths into nested mappings.
//!
//! A path string such as `"server.tls.cert"` is split on a delimiter into
//! [`Key`] segments, each addressing one level of nesting. Consecutive
//! delimiters are never collapsed, so `"a..b"` addresses the empty-string key
//! between `a` and `b`.
//!
//! The free functions in this module use the default `.` delimiter; build a
//! [`PathAccessor`] for anything else.
//!
//! ```rust
//! use dotpath::{Mapping, exists, get, set, unset};
//!
//! let config = set(Mapping::new(), "a.b.c", 42)?;
//! assert_eq!(get(&config, "a.b.c").and_then(|v| v.as_i64()), Some(42));
//!
//! let trimmed = unset(config, "a.b");
//! assert!(!exists(&trimmed, "a.b"));
//! assert!(exists(&trimmed, "a"));
//! # Ok::<_, std::sync::Arc<dotpath::DotpathError>>(())
//! ```

mod accessor;
mod flatten;
mod options;

use std::sync::{Arc, LazyLock};

use crate::{DotpathError, DotpathResult, Key, Mapping, Value};

pub use accessor::PathAccessor;
pub use options::AccessorOptions;

static DEFAULT_ACCESSOR: LazyLock<PathAccessor> = LazyLock::new(PathAccessor::new);

/// A parsed path: the original text plus its key segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
    delimiter: String,
    keys: Vec<Key>,
}

impl KeyPath {
    /// Split `path` on `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`DotpathError::EmptyDelimiter`] when `delimiter` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{Key, KeyPath};
    ///
    /// let path = KeyPath::parse("items.0..name", ".")?;
    /// assert_eq!(
    ///     path.keys(),
    ///     &[
    ///         Key::Name("items".into()),
    ///         Key::Index(0),
    ///         Key::Name(String::new()),
    ///         Key::Name("name".into()),
    ///     ]
    /// );
    /// # Ok::<_, std::sync::Arc<dotpath::DotpathError>>(())
    /// ```
    pub fn parse(path: &str, delimiter: &str) -> DotpathResult<Self> {
        if delimiter.is_empty() {
            return Err(Arc::new(DotpathError::EmptyDelimiter));
        }
        Ok(Self::split(path, delimiter))
    }

    /// Split assuming `delimiter` has already been validated.
    pub(crate) fn split(path: &str, delimiter: &str) -> Self {
        Self {
            raw: path.to_owned(),
            delimiter: delimiter.to_owned(),
            keys: path.split(delimiter).map(Key::parse).collect(),
        }
    }

    /// The path as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The key segments, outermost first.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Number of segments. Always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`: splitting yields at least one segment.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Text of the segment at `depth`, or an empty string past the end.
    pub(crate) fn segment(&self, depth: usize) -> String {
        self.keys.get(depth).map(Key::to_string).unwrap_or_default()
    }

    /// The first `depth` segments joined back together.
    pub(crate) fn prefix(&self, depth: usize) -> String {
        self.keys
            .iter()
            .take(depth)
            .map(Key::to_string)
            .collect::<Vec<_>>()
            .join(&self.delimiter)
    }
}

/// Read the value at `path`, or `None` when any segment is missing.
#[must_use]
pub fn get<'a>(mapping: &'a Mapping, path: &str) -> Option<&'a Value> {
    DEFAULT_ACCESSOR.get(mapping, path)
}

/// Read the value at `path`, falling back to `default`.
#[must_use]
pub fn get_or<'a>(mapping: &'a Mapping, path: &str, default: &'a Value) -> &'a Value {
    DEFAULT_ACCESSOR.get_or(mapping, path, default)
}

/// Read the value at `path`, failing when any segment is missing.
///
/// # Errors
///
/// Returns [`DotpathError::PathNotFound`] naming the first missing segment.
pub fn try_get<'a>(mapping: &'a Mapping, path: &str) -> DotpathResult<&'a Value> {
    DEFAULT_ACCESSOR.try_get(mapping, path)
}

/// Write `value` at `path`, creating intermediate mappings as needed.
///
/// # Errors
///
/// Returns [`DotpathError::PathConflict`] when an intermediate segment holds
/// a value that is not a mapping.
pub fn set(mapping: Mapping, path: &str, value: impl Into<Value>) -> DotpathResult<Mapping> {
    DEFAULT_ACCESSOR.set(mapping, path, value)
}

/// Remove the value at `path`; missing paths leave `mapping` unchanged.
#[must_use]
pub fn unset(mapping: Mapping, path: &str) -> Mapping {
    DEFAULT_ACCESSOR.unset(mapping, path)
}

/// Returns `true` when every segment of `path` is present.
#[must_use]
pub fn exists(mapping: &Mapping, path: &str) -> bool {
    DEFAULT_ACCESSOR.exists(mapping, path)
}

/// Flatten `mapping` into `(path, leaf)` pairs joined with `.`.
#[must_use]
pub fn flatten(mapping: &Mapping) -> Vec<(String, Value)> {
    DEFAULT_ACCESSOR.flatten(mapping)
}

/// Rebuild a mapping from `.`-joined `(path, value)` pairs.
///
/// # Errors
///
/// Returns [`DotpathError::PathConflict`] when entries disagree about whether
/// a prefix is a mapping or a leaf.
pub fn expand<I, S, V>(entries: I) -> DotpathResult<Mapping>
where
    I: IntoIterator<Item = (S, V)>,
    S: AsRef<str>,
    V: Into<Value>,
{
    DEFAULT_ACCESSOR.expand(entries)
}

/// Returns `true` when `path` is present and does not resolve to
/// [`Value::Null`].
#[must_use]
pub fn isset(mapping: &Mapping, path: &str) -> bool {
    DEFAULT_ACCESSOR.isset(mapping, path)
}
