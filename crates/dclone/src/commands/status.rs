use clap::ArgMatches;
use tracing::{error, info};

use dclone_core::events;
use dclone_core::status::{StatusRow, all_rows, filter_view, time_ago};
use dclone_core::{Core, Ladder, StatusSource};

use super::helpers::{build_source, load_valid_config, now_epoch, resolve_selection, runtime};
use super::json_types::StatusRowJson;
use crate::color;
use crate::table::{Cell, Table};

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let show_all = matches.get_flag("all");

    let config = load_valid_config()?;
    let (core, ladder) = resolve_selection(matches, &config)?;
    let source = build_source(&config)?;

    info!(
        event = "cli.status_started",
        url = source.url(),
        all = show_all,
        json_output = json_output
    );

    let batch = match runtime()?.block_on(source.fetch()) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("{} {}", color::error("Error fetching data:"), e);
            if e.should_alert() {
                eprintln!(
                    "  {}",
                    color::hint("diablo2.io may be down. Try again in a minute.")
                );
            } else {
                eprintln!(
                    "  {}",
                    color::hint("Rate limited by diablo2.io. Wait a minute before retrying.")
                );
            }
            error!(event = "cli.status_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let rows = if show_all {
        all_rows(&batch)
    } else {
        filter_view(&batch, core, ladder)
    };
    let now = now_epoch();

    if json_output {
        let json: Vec<StatusRowJson> = rows
            .into_iter()
            .map(|row| StatusRowJson {
                updated: time_ago(row.observed_at, now),
                row,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else if show_all {
        print_all(&rows, now);
    } else {
        print_selection(&rows, core, ladder, now);
    }

    info!(event = "cli.status_completed", rows = batch.len());
    Ok(())
}

pub(crate) fn print_selection(rows: &[StatusRow], core: Core, ladder: Ladder, now: i64) {
    println!("{}", color::bold(&format!("{} | {}", ladder, core)));
    if rows.is_empty() {
        println!("{}", color::ash("No status data for this selection."));
        return;
    }

    let mut table = Table::new(vec!["Region", "Progress", "Updated"]);
    for row in rows {
        table.push(vec![
            Cell::styled(row.region.name(), color::frost),
            progress_cell(row),
            Cell::plain(time_ago(row.observed_at, now)),
        ]);
    }
    table.print();
}

fn print_all(rows: &[StatusRow], now: i64) {
    if rows.is_empty() {
        println!("{}", color::ash("No status data returned."));
        return;
    }

    let mut table = Table::new(vec!["Region", "Ladder", "Core", "Progress", "Updated"]);
    for row in rows {
        table.push(vec![
            Cell::styled(row.region.name(), color::frost),
            Cell::plain(row.ladder.name()),
            Cell::plain(row.core.name()),
            progress_cell(row),
            Cell::plain(time_ago(row.observed_at, now)),
        ]);
    }
    table.print();
}

fn progress_cell(row: &StatusRow) -> Cell {
    let progress = row.progress;
    Cell::styled(row.progress_label(), move |s| color::progress(s, progress))
}
