//! Command-line interface for innertube-context.
//!
//! This module provides commands for inspecting the profile catalog, the
//! decoration each profile applies, and what its bootstrap page resolves to.

mod commands;

pub use commands::{Cli, Commands, run_command};
