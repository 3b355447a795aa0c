//! Extensions for mapping errors to `DotpathResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(e.into()))`
//! patterns when converting decoder errors into the crate's
//! `DotpathResult<T>` alias (`Result<T, Arc<DotpathError>>`).
//!
//! # Examples
//!
//! ```
//! use dotpath::{DotpathResult, IntoDotpath};
//!
//! fn encode() -> DotpathResult<serde_json::Value> {
//!     serde_json::to_value(42).into_dotpath()
//! }
//! ```

use std::sync::Arc;

use crate::{DotpathError, DotpathResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<DotpathError>` into a `DotpathResult<T>`.
pub trait IntoDotpath<T> {
    /// Convert `Result<T, E>` into `DotpathResult<T>` using `Into<DotpathError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<DotpathError>`.
    fn into_dotpath(self) -> DotpathResult<T>;
}

impl<T, E> IntoDotpath<T> for Result<T, E>
where
    E: Into<DotpathError>,
{
    fn into_dotpath(self) -> DotpathResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension for attributing decode failures to a specific path.
pub(crate) trait DecodeAtExt<T> {
    /// Map the error into [`DotpathError::Decode`] naming `path`.
    fn decode_at(self, path: &str) -> DotpathResult<T>;
}

impl<T, E> DecodeAtExt<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn decode_at(self, path: &str) -> DotpathResult<T> {
        self.map_err(|e| Arc::new(DotpathError::decode(path, e)))
    }
}
