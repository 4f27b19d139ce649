//! Loads the CSV time log and derives per-row timestamps and durations.

use crate::errors::{AppError, AppResult};
use crate::models::{LogRow, RawLogRow};
use crate::utils::date::localize;
use crate::utils::time::{minutes_between, minutes_to_hours};
use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const TS_COLUMNS: [&str; 5] = ["year", "month", "day", "hour", "minute"];

/// Load a time log from disk. See [`read_timelog`].
pub fn load_timelog(path: &Path, tz: Tz) -> AppResult<Vec<LogRow>> {
    let file = File::open(path)?;
    let rows = read_timelog(file, tz)?;
    debug!(path = %path.display(), rows = rows.len(), "time log loaded");
    Ok(rows)
}

/// Parse a time log and return its rows ordered by timestamp, with
/// durations filled in.
pub fn read_timelog<R: Read>(reader: R, tz: Tz) -> AppResult<Vec<LogRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut fill = ForwardFill::default();
    let mut rows = Vec::new();

    for (idx, record) in rdr.deserialize::<RawLogRow>().enumerate() {
        let raw = record?;
        let row_no = idx + 1;

        let parts = fill
            .apply(raw.components())
            .map_err(|reason| AppError::InvalidTimestamp { row: row_no, reason })?;
        let timestamp = make_timestamp(parts, tz)
            .map_err(|reason| AppError::InvalidTimestamp { row: row_no, reason })?;

        rows.push(LogRow::new(timestamp, raw.action, raw.task_id));
    }

    // stable: rows sharing a timestamp keep file order
    rows.sort_by_key(|r| r.timestamp);
    assign_durations(&mut rows);

    Ok(rows)
}

/// Keep rows at or after `cutoff`.
pub fn filter_since(rows: Vec<LogRow>, cutoff: DateTime<Tz>) -> Vec<LogRow> {
    rows.into_iter().filter(|r| r.timestamp >= cutoff).collect()
}

/// Last seen value of each timestamp column.
#[derive(Debug, Default)]
struct ForwardFill {
    last: [Option<i64>; 5],
}

impl ForwardFill {
    fn apply(&mut self, parts: [Option<i64>; 5]) -> Result<[i64; 5], String> {
        let mut out = [0; 5];
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_some() {
                self.last[i] = part;
            }
            out[i] = self.last[i]
                .ok_or_else(|| format!("'{}' is empty and no earlier row sets it", TS_COLUMNS[i]))?;
        }
        Ok(out)
    }
}

fn component(value: i64, column: &str) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("'{}' out of range: {}", column, value))
}

fn make_timestamp(parts: [i64; 5], tz: Tz) -> Result<DateTime<Tz>, String> {
    let [year, month, day, hour, minute] = parts;

    let year = i32::try_from(year).map_err(|_| format!("'year' out of range: {}", year))?;
    let date = NaiveDate::from_ymd_opt(year, component(month, "month")?, component(day, "day")?)
        .ok_or_else(|| format!("invalid date {}-{}-{}", year, month, day))?;
    let time = NaiveTime::from_hms_opt(component(hour, "hour")?, component(minute, "minute")?, 0)
        .ok_or_else(|| format!("invalid time {}:{}", hour, minute))?;

    let naive = date.and_time(time);
    localize(naive, tz).ok_or_else(|| format!("{} does not exist in {}", naive, tz))
}

/// Duration of a row is the gap to the next row of the same day. The last
/// row of a day repeats the previous gap; a lone row gets nothing.
fn assign_durations(rows: &mut [LogRow]) {
    for day in rows.chunk_by_mut(|a, b| a.spent_on() == b.spent_on()) {
        let mut last_delta = None;
        for i in 0..day.len() {
            let delta = match day.get(i + 1) {
                Some(next) => Some(minutes_between(&day[i].timestamp, &next.timestamp)),
                None => last_delta,
            };
            last_delta = delta;
            day[i].duration_minutes = delta;
            day[i].duration_hours = delta.map(minutes_to_hours);
        }
    }
}
