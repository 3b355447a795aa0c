//! Constructors and aggregation helpers for `DotpathError`.

use std::sync::Arc;

use super::{AggregatedErrors, DotpathError};

impl DotpathError {
    /// Tries to build a [`DotpathError`] from an iterator of errors.
    ///
    /// The iterator is consumed eagerly. It returns:
    /// * `None` when no errors are supplied;
    /// * the inner error when a single [`Arc`] is uniquely owned;
    /// * [`Self::Aggregate`] containing that single [`Arc`] when the error is already shared; and
    /// * [`Self::Aggregate`] combining every error for two or more inputs.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.is_empty() {
            return None;
        }
        Some(if arcs.len() == 1 {
            let last = arcs.pop()?;
            match Arc::try_unwrap(last) {
                Ok(err) => err,
                Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
            }
        } else {
            Self::Aggregate(Box::new(AggregatedErrors::new(arcs)))
        })
    }

    /// Construct a [`Self::PathNotFound`] for `segment` within `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::DotpathError;
    /// let e = DotpathError::path_not_found("b", "a.b");
    /// assert_eq!(e.to_string(), "path 'a.b' not found: missing segment 'b'");
    /// ```
    #[must_use]
    pub fn path_not_found(segment: impl Into<String>, path: impl Into<String>) -> Self {
        Self::PathNotFound {
            segment: segment.into(),
            path: path.into(),
        }
    }

    /// Construct a [`Self::PathConflict`] for `segment` blocked at `parent`.
    #[must_use]
    pub fn path_conflict(segment: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::PathConflict {
            segment: segment.into(),
            parent: parent.into(),
        }
    }

    /// Construct an [`Self::InvalidInput`] wrapped in an [`Arc`].
    ///
    /// `argument` is the one-based position used in messages.
    #[must_use]
    pub fn invalid_input_arc(argument: usize, found: &'static str) -> Arc<Self> {
        Arc::new(Self::InvalidInput { argument, found })
    }

    /// Construct a [`Self::Decode`] from any displayable failure.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
