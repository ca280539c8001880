use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("dclone")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track Diablo Clone spawn progress and get notified when it rises")
        .long_about("dclone polls the diablo2.io dclone API, shows world-boss spawn progress per region, ladder and core, and sends a desktop notification whenever progress increases on a server you track.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

/// `--core` / `--ladder` selection shared by `status` and `watch`.
pub fn selection_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("core")
                .long("core")
                .help("Core to show (default from config: softcore)")
                .value_parser(["softcore", "hardcore"]),
        )
        .arg(
            Arg::new("ladder")
                .long("ladder")
                .help("Ladder variant to show (default from config: ladder)")
                .value_parser(["ladder", "non-ladder"]),
        )
}
