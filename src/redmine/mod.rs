//! Redmine time entry creation.
//!
//! The importer only talks to [`TimeEntrySink`], so it runs the same against
//! the real REST client, the dry-run printer, or a test double.

mod client;
mod dry_run;

pub use client::{RedmineClient, api_error_message};
pub use dry_run::DryRunSink;

use crate::errors::AppResult;
use crate::models::TimeEntry;

pub trait TimeEntrySink {
    /// Create one time entry. Blocks until the remote side has answered.
    fn create_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()>;
}
