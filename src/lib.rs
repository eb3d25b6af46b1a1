//! innertube-context - request context resolution for a multi-profile
//! InnerTube API client.
//!
//! Provides the fixed catalog of client identities, the locale overlay,
//! lazily fetched per-profile bootstrap configuration, and the decoration
//! that makes each profile's requests look authentic.

pub mod cli;
pub mod config;
pub mod error;
pub mod innertube;
#[cfg(test)]
pub mod test_utils;
