//! Recursive value model addressed by paths and combined by merges.
//!
//! A [`Mapping`] associates [`Key`]s with [`Value`]s, and a [`Value`] is
//! either a scalar leaf or another [`Mapping`]. Keys are either positional
//! ([`Key::Index`]) or associative ([`Key::Name`]); the distinction drives
//! the append-versus-overwrite rules of [`crate::merge`].

mod convert;
mod key;
mod mapping;
mod serde_impl;

pub use key::Key;
pub use mapping::Mapping;

/// A leaf or nested mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The "no value" sentinel. Present keys holding `Null` exist but are not set.
    #[default]
    Null,
    /// Boolean leaf.
    Bool(bool),
    /// Signed integer leaf.
    Int(i64),
    /// Floating point leaf.
    Float(f64),
    /// Text leaf.
    String(String),
    /// Nested mapping.
    Map(Mapping),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when the value is a nested mapping.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Borrow the nested mapping, if any.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow the nested mapping, if any.
    #[must_use]
    pub const fn as_map_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Consume the value, returning the nested mapping, if any.
    #[must_use]
    pub fn into_map(self) -> Option<Mapping> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow a text leaf.
    #[must_use]
    pub const fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Read an integer leaf.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Read a boolean leaf.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Map(_) => "mapping",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests;
