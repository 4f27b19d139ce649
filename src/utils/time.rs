//! Time utilities: minute deltas between zoned timestamps and hour formatting.

use chrono::{DateTime, TimeZone};

/// Signed distance from `start` to `end` in (fractional) minutes.
pub fn minutes_between<T: TimeZone>(start: &DateTime<T>, end: &DateTime<T>) -> f64 {
    let delta = end.clone() - start.clone();
    delta.num_seconds() as f64 / 60.0
}

pub fn minutes_to_hours(mins: f64) -> f64 {
    mins / 60.0
}

/// `HH:MM` rendering of a time entry's hours; `--:--` when the duration
/// could not be derived.
pub fn format_hours(hours: Option<f64>) -> String {
    match hours {
        Some(h) => {
            let mins = (h * 60.0).round() as i64;
            format!("{:02}:{:02}", mins / 60, mins % 60)
        }
        None => "--:--".to_string(),
    }
}
