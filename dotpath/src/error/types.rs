//! Primary error enum for the path engine.

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors raised by [`crate::PathAccessor`], [`crate::merge`] and the loaders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DotpathError {
    /// A segment was absent while reading in throwing mode.
    #[error("path '{path}' not found: missing segment '{segment}'")]
    PathNotFound {
        /// Segment that could not be resolved.
        segment: String,
        /// Full path as supplied by the caller.
        path: String,
    },

    /// A write had to descend through a value that is not a mapping.
    #[error("cannot set '{segment}': '{parent}' does not hold a mapping")]
    PathConflict {
        /// Segment that could not be written.
        segment: String,
        /// Path prefix whose value blocks the descent.
        parent: String,
    },

    /// A merge argument was not a mapping.
    #[error("argument {argument} is not a mapping (found {found})")]
    InvalidInput {
        /// One-based position of the offending argument.
        argument: usize,
        /// Kind of value supplied instead.
        found: &'static str,
    },

    /// Paths cannot be split on an empty delimiter.
    #[error("path delimiter must not be empty")]
    EmptyDelimiter,

    /// A value could not be decoded into or out of a mapping.
    #[error("failed to decode '{path}': {message}")]
    Decode {
        /// Path or source description the failure relates to.
        path: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// Several independent failures reported together.
    #[error("multiple errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
