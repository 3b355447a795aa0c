//! Path-addressed access and deep merging for nested mappings.
//!
//! The crate works on a single recursive value model: a [`Mapping`] from
//! [`Key`]s to [`Value`]s, where a value may itself be a mapping. Two
//! families of operations act on it:
//!
//! - [`PathAccessor`] (and the `.`-delimited free functions [`get`],
//!   [`try_get`], [`set`], [`unset`], [`exists`] and [`isset`]) read, write,
//!   remove and test values addressed by delimited path strings.
//! - [`merge`] folds any number of mappings into one, appending positional
//!   entries and recursively merging associative ones.
//!
//! Mappings are usually decoded configuration; see
//! [`Mapping::from_json_str`], [`Mapping::from_provider`] and the `serde`
//! implementations on [`Value`].
//!
//! ```rust
//! use dotpath::{Mapping, Value, get, merge, set};
//! use serde_json::json;
//!
//! let defaults = Mapping::try_from(json!({"server": {"port": 80}}))?;
//! let overrides = set(Mapping::new(), "server.host", "example.org")?;
//! let config = merge([Value::from(defaults), Value::from(overrides)])?;
//!
//! assert_eq!(get(&config, "server.port"), Some(&Value::Int(80)));
//! assert_eq!(get(&config, "server.host"), Some(&Value::from("example.org")));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;

mod error;
mod load;
mod merge;
mod path;
mod result_ext;
mod value;

pub use error::{AggregatedErrors, DotpathError};
pub use merge::{merge, merge_into, merge_mappings};
pub use path::{
    AccessorOptions, KeyPath, PathAccessor, exists, expand, flatten, get, get_or, isset, set,
    try_get, unset,
};
pub use result_ext::IntoDotpath;
pub use value::{Key, Mapping, Value};

/// Re-export of `serde_json` so callers can build values with `json!`.
pub use serde_json;

/// Result type used throughout the crate. Errors are shared so that
/// aggregates can hold them without cloning.
pub type DotpathResult<T> = Result<T, Arc<DotpathError>>;
