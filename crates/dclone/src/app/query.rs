use clap::{Arg, ArgAction, Command};

use super::global::selection_args;

pub fn status_command() -> Command {
    selection_args(
        Command::new("status")
            .about("Fetch current Diablo Clone progress once and print it"),
    )
    .arg(
        Arg::new("all")
            .long("all")
            .help("Show every region, ladder and core")
            .action(ArgAction::SetTrue)
            .conflicts_with_all(["core", "ladder"]),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .help("Output in JSON format")
            .action(ArgAction::SetTrue),
    )
}

pub fn servers_command() -> Command {
    Command::new("servers")
        .about("List all servers and whether notifications are on for each")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
