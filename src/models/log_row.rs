use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Deserialize;

/// One record as it appears in the CSV export.
///
/// Timestamp components are sparse: an empty cell means "same as the
/// previous row" and is resolved by the timelog loader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLogRow {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    #[serde(default)]
    pub action: String,
    #[serde(rename = "redmine task id", default)]
    pub task_id: String,
}

impl RawLogRow {
    /// Components in `year, month, day, hour, minute` order.
    pub fn components(&self) -> [Option<i64>; 5] {
        [self.year, self.month, self.day, self.hour, self.minute]
    }
}

/// A time log row after timestamp reconstruction and duration derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub timestamp: DateTime<Tz>,
    pub action: String,
    pub task_id: String,
    /// Gap to the next row of the same day; `None` for a day with a single row.
    pub duration_minutes: Option<f64>,
    pub duration_hours: Option<f64>,
}

impl LogRow {
    pub fn new(timestamp: DateTime<Tz>, action: String, task_id: String) -> Self {
        Self {
            timestamp,
            action,
            task_id,
            duration_minutes: None,
            duration_hours: None,
        }
    }

    /// Redmine issue id, if the task id cell holds an integer.
    pub fn issue_id(&self) -> Option<i64> {
        self.task_id.trim().parse().ok()
    }

    /// Calendar day of the row in its own time zone.
    pub fn spent_on(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
