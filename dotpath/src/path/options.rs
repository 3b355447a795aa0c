//! Accessor configuration loadable from any figment provider.

use figment::{Figment, Provider};
use serde::{Deserialize, Serialize};

use super::PathAccessor;
use crate::{DotpathResult, IntoDotpath};

/// Serialisable settings for a [`PathAccessor`].
///
/// ```rust
/// use dotpath::AccessorOptions;
/// use figment::providers::Serialized;
///
/// let options = AccessorOptions::from_provider(Serialized::defaults(AccessorOptions {
///     delimiter: "::".into(),
/// }))?;
/// assert_eq!(options.build()?.delimiter(), "::");
/// # Ok::<_, std::sync::Arc<dotpath::DotpathError>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorOptions {
    /// Separator between path segments.
    pub delimiter: String,
}

impl Default for AccessorOptions {
    fn default() -> Self {
        Self {
            delimiter: PathAccessor::DEFAULT_DELIMITER.to_owned(),
        }
    }
}

impl AccessorOptions {
    /// Extract options from `provider`; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DotpathError::Decode`] when the provider fails or
    /// yields values of the wrong shape.
    pub fn from_provider<P: Provider>(provider: P) -> DotpathResult<Self> {
        Figment::from(provider).extract().into_dotpath()
    }

    /// Build the accessor these options describe.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DotpathError::EmptyDelimiter`] for an empty delimiter.
    pub fn build(self) -> DotpathResult<PathAccessor> {
        PathAccessor::with_delimiter(self.delimiter)
    }
}
