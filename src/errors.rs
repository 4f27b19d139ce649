//! Unified application error type.
//! Every stage of the import pipeline (config, timelog, redmine, cli)
//! returns AppError so `main` has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid timestamp in row {row}: {reason}")]
    InvalidTimestamp { row: usize, reason: String },

    #[error("Invalid --since value '{0}' (expected YYYY-MM-DDThh:mm)")]
    InvalidSince(String),

    // ---------------------------
    // Remote errors
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Redmine API error {status}: {message}")]
    Api { status: u16, message: String },
}

pub type AppResult<T> = Result<T, AppError>;
