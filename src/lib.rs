//! Web application settings - profile-driven configuration resolution
//!
//! This crate resolves the settings a web application framework reads at
//! startup: a base layer of shared defaults, overlaid by a development or
//! production profile sourced from environment variables.
//!
//! # Modules
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Profiles, layers, resolver and the settings snapshot
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```no_run
//! use webapp_settings::{config::load_env_file, Settings};
//!
//! load_env_file(".env".as_ref()).unwrap();
//! let settings = Settings::from_env().unwrap();
//! assert!(settings.is_host_allowed("localhost"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{resolve, Profile, Resolver, Settings};
pub use errors::{ConfigError, ConfigResult};
