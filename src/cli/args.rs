//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{DEFAULT_ENV_FILE, PROFILE_SELECTOR_VAR};

/// Resolve and inspect web application settings
#[derive(Parser, Debug)]
#[command(name = "webapp-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file loaded into the process environment before resolving
    #[arg(long, global = true, env = "ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Skip loading the env file
    #[arg(long, global = true)]
    pub no_env_file: bool,

    /// Variable that selects the profile
    #[arg(long, global = true, default_value = PROFILE_SELECTOR_VAR)]
    pub selector_var: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved settings (secrets redacted)
    Show(ShowArgs),

    /// Print a single setting by name
    Get(GetArgs),

    /// Run system checks and exit non-zero on failure
    Check,

    /// Test request hosts against the allowlist
    Hosts(HostsArgs),
}

/// Output format for `show`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Setting name (e.g. "DEBUG", "MIDDLEWARE")
    pub name: String,
}

/// Arguments for the hosts command
#[derive(Parser, Debug)]
pub struct HostsArgs {
    /// Hosts to test, optionally with a port
    #[arg(required = true)]
    pub hosts: Vec<String>,
}
