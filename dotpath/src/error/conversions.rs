//! Trait-based conversions between external error types and `DotpathError`.

use figment::Error as FigmentError;

use super::DotpathError;

/// Convert JSON encoding or decoding failures into [`DotpathError::Decode`].
impl From<serde_json::Error> for DotpathError {
    fn from(e: serde_json::Error) -> Self {
        Self::decode(
            "json",
            format_args!("{e} at line {}, column {}", e.line(), e.column()),
        )
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for DotpathError {
    fn from(e: toml::de::Error) -> Self {
        Self::decode("toml", e.message())
    }
}

impl From<FigmentError> for DotpathError {
    fn from(e: FigmentError) -> Self {
        let path = if e.path.is_empty() {
            String::from("provider")
        } else {
            e.path.join(".")
        };
        Self::decode(path, &e.kind)
    }
}
