//! Colored status lines for the import run.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

/// Tag in front of every entry a dry run would have posted.
pub const DRY_RUN_TAG: &str = "[dry-run]";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}ℹ️ {}{}", FG_BLUE, BOLD, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}✅ {}{}", FG_GREEN, BOLD, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}⚠️ {}{}", FG_YELLOW, BOLD, RESET, msg);
}

/// One time entry that was not sent to Redmine.
pub fn dry_run_entry<T: fmt::Display>(msg: T) {
    println!("{}{}{}{} {}", FG_CYAN, BOLD, DRY_RUN_TAG, RESET, msg);
}
