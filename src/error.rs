//! Crate-level error types.
//!
//! The resolver core never surfaces fetch failures to callers (they become
//! `None` inside [`ConfigurationFetcher`](crate::innertube::ConfigurationFetcher)).
//! This enum covers the surfaces around it: name lookups, locale parsing,
//! configuration loading and transport construction.
//!
//! The binary uses `anyhow` on top of these.
//!
//! # Example
//!
//! ```ignore
//! use innertube_context::error::Result;
//! use innertube_context::innertube::{Locale, ProfileKind};
//!
//! fn pick(name: &str, tag: &str) -> Result<(ProfileKind, Locale)> {
//!     Ok((name.parse()?, tag.parse()?))
//! }
//! ```

use crate::config::ConfigError;
use crate::innertube::FetchError;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Name does not match any catalog profile
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// Locale string could not be parsed
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport construction or fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

impl Error {
    /// Create an unknown-profile error.
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        Self::UnknownProfile(name.into())
    }

    /// Create an invalid-locale error.
    pub fn invalid_locale(input: impl Into<String>) -> Self {
        Self::InvalidLocale(input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_profile("desktop");
        assert_eq!(err.to_string(), "Unknown profile: desktop");
    }

    #[test]
    fn test_invalid_locale_is_quoted() {
        let err = Error::invalid_locale("");
        assert_eq!(err.to_string(), "Invalid locale: \"\"");
    }

    #[test]
    fn test_fetch_error_converts() {
        fn build() -> Result<()> {
            Err::<(), _>(FetchError::Client("no TLS backend".to_string()))?;
            Ok(())
        }
        let err = build().unwrap_err();
        assert!(matches!(err, Error::Fetch(FetchError::Client(_))));
        assert!(err.to_string().contains("no TLS backend"));
    }
}
