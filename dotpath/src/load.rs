//! Decoding mappings from configuration sources.

use figment::{Figment, Provider};
use tracing::debug;

use crate::{DotpathResult, IntoDotpath, Mapping};

impl Mapping {
    /// Parse a JSON document whose root is an object or array.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DotpathError::Decode`] when the text is not valid
    /// JSON or its root is a scalar.
    pub fn from_json_str(data: &str) -> DotpathResult<Self> {
        serde_json::from_str(data).into_dotpath()
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DotpathError::Decode`] when the text is not valid TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(data: &str) -> DotpathResult<Self> {
        toml::from_str(data).into_dotpath()
    }

    /// Collect everything `provider` supplies into a mapping.
    ///
    /// Any figment provider works, including environment variables split into
    /// nested keys with `Env::prefixed("APP_").split("__")`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DotpathError::Decode`] when the provider fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotpath::{Mapping, get};
    /// use figment::providers::Serialized;
    /// use serde_json::json;
    ///
    /// let tree = Mapping::from_provider(Serialized::defaults(json!({"log": {"level": "info"}})))?;
    /// assert_eq!(get(&tree, "log.level").and_then(|v| v.as_str()), Some("info"));
    /// # Ok::<_, std::sync::Arc<dotpath::DotpathError>>(())
    /// ```
    pub fn from_provider<P: Provider>(provider: P) -> DotpathResult<Self> {
        let figment = Figment::from(provider);
        figment.extract().into_dotpath().inspect_err(|err| {
            debug!(error = %err, "provider did not decode into a mapping");
        })
    }
}
