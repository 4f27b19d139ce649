use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{ImportSummary, filter_since, import_timelog, load_timelog};
use crate::errors::AppResult;
use crate::redmine::{DryRunSink, RedmineClient, TimeEntrySink};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{SINCE_FORMAT, parse_since, start_of_today};
use tracing::debug;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    debug!(path = %config_path.display(), "loading configuration");
    let cfg = Config::load(&config_path)?;

    let mut sink: Box<dyn TimeEntrySink> = if cli.dry_run {
        Box::new(DryRunSink::default())
    } else {
        let client = RedmineClient::new(&cfg)?;
        debug!(base_url = client.base_url(), "redmine client ready");
        Box::new(client)
    };

    let tz = cfg.time_zone()?;
    let rows = load_timelog(&cli.filename, tz)?;

    let since = match &cli.since {
        Some(s) => parse_since(s, tz)?,
        None => start_of_today(tz)?,
    };
    let total = rows.len();
    let rows = filter_since(rows, since);

    if rows.is_empty() {
        warning(format!(
            "No rows at or after {} ({} rows in log). Nothing to import.",
            since.format(SINCE_FORMAT),
            total
        ));
        return Ok(());
    }

    info(format!(
        "Importing {} of {} rows since {}",
        rows.len(),
        total,
        since.format(SINCE_FORMAT)
    ));

    let summary = import_timelog(sink.as_mut(), &rows)?;
    report(&summary, cli.dry_run);
    Ok(())
}

fn report(summary: &ImportSummary, dry_run: bool) {
    let verb = if dry_run { "would be created" } else { "created" };
    success(format!(
        "{} time entries {}, {} rows skipped (no numeric task id)",
        summary.created, verb, summary.skipped
    ));
}
