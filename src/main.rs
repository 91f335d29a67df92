//! Web application settings - entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webapp_settings::{
    cli::{Cli, Commands},
    commands,
    config::{load_env_file, ProcessEnv, Resolver},
    errors::ConfigResult,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Refuse to continue on any settings error
    if let Err(e) = run(cli) {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ConfigResult<()> {
    if !cli.no_env_file {
        load_env_file(&cli.env_file)?;
    }

    let resolver = Resolver::new().with_selector_var(cli.selector_var);
    let env = ProcessEnv;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Show(args) => commands::show::execute(args, &resolver, &env, &mut out),
        Commands::Get(args) => commands::get::execute(args, &resolver, &env, &mut out),
        Commands::Check => commands::check::execute(&resolver, &env, &mut out),
        Commands::Hosts(args) => commands::hosts::execute(args, &resolver, &env, &mut out),
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
