use clap::{Arg, Command};

pub fn notify_command() -> Command {
    Command::new("notify")
        .about("Turn progress notifications on or off globally")
        .subcommand_required(true)
        .subcommand(Command::new("on").about("Enable notifications"))
        .subcommand(Command::new("off").about("Disable notifications"))
        .subcommand(Command::new("status").about("Show whether notifications are enabled"))
}

fn server_key_arg() -> Arg {
    Arg::new("server")
        .help("Server key, e.g. americas-ladder-hardcore (see `dclone servers`)")
        .required(true)
        .index(1)
}

pub fn track_command() -> Command {
    Command::new("track")
        .about("Enable notifications for a server")
        .arg(server_key_arg())
}

pub fn untrack_command() -> Command {
    Command::new("untrack")
        .about("Disable notifications for a server")
        .arg(server_key_arg())
}

pub fn toggle_command() -> Command {
    Command::new("toggle")
        .about("Flip notifications for a server")
        .arg(server_key_arg())
}
