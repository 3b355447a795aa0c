//! Shared helpers for working with `figment::Jail` in tests.
//!
//! The jail isolates environment variables and files so provider-backed
//! loading can be exercised without leaking state between tests.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it returns an
/// error. Failures are converted into `anyhow::Error` values so callers can
/// use `?` without extra plumbing.
///
/// # Errors
///
/// Returns an error if the jail fails to initialise or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts a `dotpath` error into a [`figment::Error`] so it can cross a
/// jail closure boundary with `?`.
#[must_use]
pub fn jail_error(err: &dotpath::DotpathError) -> figment::Error {
    figment::Error::from(err.to_string())
}
