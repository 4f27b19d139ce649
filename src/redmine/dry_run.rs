use super::TimeEntrySink;
use crate::errors::AppResult;
use crate::models::TimeEntry;
use crate::ui::messages::dry_run_entry;
use crate::utils::time::format_hours;

/// Prints the entries that would be created instead of posting them.
#[derive(Debug, Default)]
pub struct DryRunSink {
    pub entries: Vec<TimeEntry>,
}

impl TimeEntrySink for DryRunSink {
    fn create_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()> {
        dry_run_entry(format!(
            "{}  #{:<6} {}  {}",
            entry.spent_on.format("%Y-%m-%d"),
            entry.issue_id,
            format_hours(entry.hours),
            entry.comments
        ));
        self.entries.push(entry.clone());
        Ok(())
    }
}
