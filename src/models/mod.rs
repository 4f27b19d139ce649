pub mod log_row;
pub mod time_entry;

pub use log_row::{LogRow, RawLogRow};
pub use time_entry::TimeEntry;
