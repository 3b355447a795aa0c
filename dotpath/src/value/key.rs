//! Mapping keys and their normalisation from text.

use std::fmt;

/// Key of a [`crate::Mapping`] entry.
///
/// Text keys normalise the way path segments do: the canonical decimal form
/// of a non-negative integer becomes [`Key::Index`], anything else stays a
/// [`Key::Name`].
///
/// ```
/// use dotpath::Key;
///
/// assert_eq!(Key::parse("3"), Key::Index(3));
/// assert_eq!(Key::parse("03"), Key::Name("03".into()));
/// assert_eq!(Key::parse(""), Key::Name(String::new()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Positional key; appended rather than overwritten when merging.
    Index(u64),
    /// Associative key; overwritten or merged recursively.
    Name(String),
}

impl Key {
    /// Normalise a text segment into a key.
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        canonical_index(segment).map_or_else(|| Self::Name(segment.to_owned()), Self::Index)
    }

    /// Rewrite a [`Key::Name`] spelling a canonical index as [`Key::Index`].
    ///
    /// ```
    /// use dotpath::Key;
    ///
    /// assert_eq!(Key::Name("0".into()).normalise(), Key::Index(0));
    /// assert_eq!(Key::Name("00".into()).normalise(), Key::Name("00".into()));
    /// ```
    #[must_use]
    pub fn normalise(self) -> Self {
        match self {
            Self::Name(name) => Self::from(name),
            index @ Self::Index(_) => index,
        }
    }

    /// The positional form of a name that should have been an index.
    pub(crate) fn positional(&self) -> Option<Self> {
        match self {
            Self::Name(name) => canonical_index(name).map(Self::Index),
            Self::Index(_) => None,
        }
    }

    /// Returns `true` for positional keys.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Returns the position of a positional key.
    #[must_use]
    pub const fn as_index(&self) -> Option<u64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }
}

/// Parses `segment` only when it is written exactly as `u64` would print it.
fn canonical_index(segment: &str) -> Option<u64> {
    let digits_only = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
    let no_padding = segment == "0" || !segment.starts_with('0');
    if digits_only && no_padding {
        segment.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        canonical_index(&value).map_or(Self::Name(value), Self::Index)
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Self::Index(value)
    }
}
