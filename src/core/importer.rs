use crate::errors::AppResult;
use crate::models::{LogRow, TimeEntry};
use crate::redmine::TimeEntrySink;
use tracing::debug;

/// Outcome of one import pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    /// Rows without an integer task id.
    pub skipped: usize,
}

/// Submit one time entry per billable row, in order.
///
/// Rows whose task id is not an integer are skipped. The first sink error
/// stops the import; entries created before it are left in place.
pub fn import_timelog<S>(sink: &mut S, rows: &[LogRow]) -> AppResult<ImportSummary>
where
    S: TimeEntrySink + ?Sized,
{
    let mut summary = ImportSummary::default();

    for row in rows {
        let Some(entry) = TimeEntry::from_row(row) else {
            debug!(timestamp = %row.timestamp, task_id = %row.task_id, "skipping row");
            summary.skipped += 1;
            continue;
        };

        sink.create_time_entry(&entry)?;
        summary.created += 1;
    }

    Ok(summary)
}
