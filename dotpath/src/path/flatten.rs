//! Conversion between nested mappings and flat `(path, value)` lists.

use super::PathAccessor;
use crate::{DotpathResult, Mapping, Value};

impl PathAccessor {
    /// List every leaf of `mapping` under its joined path, in iteration order.
    ///
    /// Empty mappings are kept as leaves so [`Self::expand`] can restore them.
    ///
    /// Keys are joined as written, so a key containing the delimiter (such as
    /// `"a.b"` under `.`) reads back from [`Self::expand`] as two nested
    /// segments. Use a delimiter no key contains when the round trip has to be
    /// exact.
    ///
    /// ```rust
    /// use dotpath::{PathAccessor, Mapping, Value};
    /// use serde_json::json;
    ///
    /// let tree = Mapping::try_from(json!({"db": {"host": "h", "ports": [1, 2]}}))?;
    /// let flat = PathAccessor::new().flatten(&tree);
    /// assert_eq!(
    ///     flat,
    ///     vec![
    ///         ("db.host".to_owned(), Value::from("h")),
    ///         ("db.ports.0".to_owned(), Value::Int(1)),
    ///         ("db.ports.1".to_owned(), Value::Int(2)),
    ///     ]
    /// );
    /// # Ok::<_, dotpath::DotpathError>(())
    /// ```
    #[must_use]
    pub fn flatten(&self, mapping: &Mapping) -> Vec<(String, Value)> {
        let mut out = Vec::new();
        self.collect_leaves(mapping, None, &mut out);
        out
    }

    fn collect_leaves(
        &self,
        mapping: &Mapping,
        prefix: Option<&str>,
        out: &mut Vec<(String, Value)>,
    ) {
        for (key, value) in mapping {
            let path = prefix.map_or_else(
                || key.to_string(),
                |parent| format!("{parent}{}{key}", self.delimiter()),
            );
            match value {
                Value::Map(child) if !child.is_empty() => {
                    self.collect_leaves(child, Some(&path), out);
                }
                leaf => out.push((path, leaf.clone())),
            }
        }
    }

    /// Rebuild a mapping by writing each entry in turn.
    ///
    /// Later entries overwrite earlier ones at the same path. Every path is
    /// split on the delimiter, so an entry cannot name a key that contains it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DotpathError::PathConflict`] when an entry has to
    /// descend through a leaf written by an earlier entry.
    pub fn expand<I, S, V>(&self, entries: I) -> DotpathResult<Mapping>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        let mut mapping = Mapping::new();
        for (path, value) in entries {
            self.set_in(&mut mapping, path.as_ref(), value)?;
        }
        Ok(mapping)
    }
}
