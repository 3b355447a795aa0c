//! Test helpers shared across the `dotpath` workspace.
//!
//! Provides `figment::Jail` plumbing for provider-backed tests and small
//! builders that turn `json!` literals into mappings with `anyhow` errors.

pub mod figment;
pub mod mapping;
