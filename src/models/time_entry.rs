use super::log_row::LogRow;
use chrono::NaiveDate;
use serde::Serialize;

/// A Redmine time entry, built from a billable log row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub issue_id: i64,
    pub spent_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    pub comments: String,
}

impl TimeEntry {
    /// Returns `None` for rows whose task id is not an integer (notes, breaks, ...).
    pub fn from_row(row: &LogRow) -> Option<Self> {
        let issue_id = row.issue_id()?;
        Some(Self {
            issue_id,
            spent_on: row.spent_on(),
            hours: row.duration_hours,
            comments: row.action.clone(),
        })
    }
}
