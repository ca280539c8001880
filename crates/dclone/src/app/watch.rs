use clap::{Arg, Command};

use super::global::selection_args;

pub fn watch_command() -> Command {
    selection_args(
        Command::new("watch")
            .about("Poll continuously, print progress, and notify on increases")
            .long_about("Polls the status API immediately and then on a fixed interval until Ctrl-C. Tracked servers whose progress rises trigger a notification through the configured backend."),
    )
    .arg(
        Arg::new("interval")
            .long("interval")
            .help("Seconds between polls (overrides poll.interval_secs)")
            .value_name("SECS")
            .value_parser(clap::value_parser!(u64).range(1..)),
    )
}
