use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for redmine-import-timelog
#[derive(Parser, Debug)]
#[command(
    name = "redmine-import-timelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import a CSV time log into Redmine as time entries",
    long_about = None
)]
pub struct Cli {
    /// CSV file with the time log
    pub filename: PathBuf,

    /// Path to the YAML config file (default: config.yaml next to the executable)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Import only rows at or after this time.
    ///
    /// Format: YYYY-MM-DDThh:mm, in the configured time zone.
    /// If omitted, the default is today at 00:00.
    #[arg(
        long,
        value_name = "YYYY-MM-DDThh:mm",
        help = "Only import rows at or after this time (default: today 00:00)"
    )]
    pub since: Option<String>,

    /// Print the entries instead of creating them in Redmine
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short)]
    pub verbose: bool,
}
