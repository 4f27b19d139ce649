pub mod importer;
pub mod timelog;

pub use importer::{ImportSummary, import_timelog};
pub use timelog::{filter_since, load_timelog, read_timelog};
