//! redmine-timelog library root.
//! Exposes the CLI parser, the high-level run() function and the import
//! pipeline modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod redmine;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; RUST_LOG overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli::commands::import::handle(&cli)
}
