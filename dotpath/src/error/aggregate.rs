//! Aggregation container and iteration support for multiple `DotpathError` values.

use std::{error::Error, fmt, sync::Arc};

use super::DotpathError;

/// Collection of [`DotpathError`]s produced by a single call.
///
/// # Examples
///
/// ```
/// use dotpath::{DotpathError, Value, merge};
///
/// let err = merge([Value::Int(1), Value::Bool(true)]).unwrap_err();
/// if let DotpathError::Aggregate(agg) = err.as_ref() {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<DotpathError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<DotpathError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &DotpathError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a DotpathError;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Arc<DotpathError>>,
        fn(&'a Arc<DotpathError>) -> &'a DotpathError,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(Arc::as_ref)
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<DotpathError>;
    type IntoIter = std::vec::IntoIter<Arc<DotpathError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
