use clap::ArgMatches;
use tracing::error;

use dclone_core::events;

mod completions;
mod helpers;
mod json_types;
mod notify;
mod servers;
mod status;
mod track;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        Some(("servers", sub_matches)) => servers::handle_servers_command(sub_matches),
        Some(("notify", sub_matches)) => notify::handle_notify_command(sub_matches),
        Some(("track", sub_matches)) => track::handle_set_tracking(sub_matches, Some(true)),
        Some(("untrack", sub_matches)) => track::handle_set_tracking(sub_matches, Some(false)),
        Some(("toggle", sub_matches)) => track::handle_set_tracking(sub_matches, None),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
