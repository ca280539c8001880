mod global;
mod misc;
mod prefs;
mod query;
mod watch;

#[cfg(test)]
mod tests;

use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(query::status_command())
        .subcommand(query::servers_command())
        .subcommand(prefs::notify_command())
        .subcommand(prefs::track_command())
        .subcommand(prefs::untrack_command())
        .subcommand(prefs::toggle_command())
        .subcommand(watch::watch_command())
        .subcommand(misc::completions_command())
}
