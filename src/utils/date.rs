use crate::errors::{AppError, AppResult};
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Format accepted by `--since`.
pub const SINCE_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Attach `tz` to a wall-clock time.
///
/// Ambiguous times (end of daylight saving) resolve to the earlier instant;
/// times skipped by a forward shift yield `None`.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// Parse a `--since` cutoff (`YYYY-MM-DDThh:mm`) in the configured zone.
pub fn parse_since(s: &str, tz: Tz) -> AppResult<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), SINCE_FORMAT)
        .map_err(|_| AppError::InvalidSince(s.to_string()))?;
    localize(naive, tz).ok_or_else(|| AppError::InvalidSince(s.to_string()))
}

/// Default cutoff: today at 00:00.
pub fn start_of_today(tz: Tz) -> AppResult<DateTime<Tz>> {
    let midnight = today().and_time(NaiveTime::MIN);
    localize(midnight, tz)
        .ok_or_else(|| AppError::InvalidSince(midnight.format(SINCE_FORMAT).to_string()))
}
