//! Error types produced by path traversal, merging and loading.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::DotpathError;

#[cfg(test)]
mod tests;
