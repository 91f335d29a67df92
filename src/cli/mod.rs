//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `show` - Print the resolved settings
//! - `get` - Print one setting by name
//! - `check` - Run system checks
//! - `hosts` - Test hosts against the allowlist

pub mod args;

pub use args::{Cli, Commands};
