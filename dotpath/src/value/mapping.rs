//! Insertion-ordered mapping with unique keys.

use std::borrow::Cow;

use indexmap::IndexMap;

use super::{Key, Value};

/// An ordered map from [`Key`] to [`Value`].
///
/// Iteration follows insertion order, and replacing an existing key keeps its
/// position. Equality ignores order: two mappings are equal when they hold the
/// same keys with equal values.
///
/// Keys are stored normalised, so a [`Key::Name`] spelling a canonical index
/// is held (and found) as the matching [`Key::Index`].
#[derive(Clone, Debug, Default)]
pub struct Mapping {
    entries: IndexMap<Key, Value>,
    next_index: u64,
}

impl Mapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `key` is present, whatever its value.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(lookup(key).as_ref())
    }

    /// Borrow the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(lookup(key).as_ref())
    }

    /// Mutably borrow the value stored under `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(lookup(key).as_ref())
    }

    /// Store `value` under `key`, returning the value it replaced.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        let stored = key.normalise();
        if let Some(index) = stored.as_index() {
            self.next_index = self.next_index.max(index.saturating_add(1));
        }
        self.entries.insert(stored, value)
    }

    /// Remove `key`, returning its value. Remaining entries keep their order.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let stored = lookup(key);
        let removed = self.entries.shift_remove(stored.as_ref())?;
        if stored
            .as_index()
            .is_some_and(|index| index.saturating_add(1) == self.next_index)
        {
            self.next_index = self
                .entries
                .keys()
                .filter_map(Key::as_index)
                .max()
                .map_or(0, |max| max.saturating_add(1));
        }
        Some(removed)
    }

    /// One past the largest positional key, or `0` when there is none.
    #[must_use]
    pub const fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Append `value` under the next free positional key and return that key.
    pub fn push(&mut self, value: Value) -> Key {
        let key = Key::Index(self.next_index);
        self.next_index = self.next_index.saturating_add(1);
        self.entries.insert(key.clone(), value);
        key
    }

    /// Returns `true` when the keys are exactly `0..len` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .zip(0_u64..)
            .all(|(k, expected)| k.as_index() == Some(expected))
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }
}

/// The stored form of `key`, borrowing unless it needs normalising.
fn lookup(key: &Key) -> Cow<'_, Key> {
    key.positional().map_or(Cow::Borrowed(key), Cow::Owned)
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(Key, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl FromIterator<Value> for Mapping {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for value in iter {
            mapping.push(value);
        }
        mapping
    }
}

impl IntoIterator for Mapping {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
