use clap::ArgMatches;
use tracing::info;

use dclone_core::Server;

use super::helpers::{on_off, open_preferences};
use super::json_types::{ServerEntryJson, ServersJson};
use crate::color;
use crate::table::{Cell, Table};

pub(crate) fn handle_servers_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.servers_started", json_output = json_output);

    let store = open_preferences()?;
    let prefs = store.preferences();

    if json_output {
        let json = ServersJson {
            notifications_enabled: prefs.global_enabled,
            servers: Server::all()
                .into_iter()
                .map(|server| {
                    let key = server.key();
                    ServerEntryJson {
                        tracked: prefs.is_server_enabled(&key),
                        key: key.to_string(),
                        label: server.label(),
                    }
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!(
        "{} {}",
        color::bold("Notifications:"),
        color::enabled(on_off(prefs.global_enabled), prefs.global_enabled)
    );

    let mut table = Table::new(vec!["Key", "Server", "Tracked"]);
    for server in Server::all() {
        let key = server.key();
        let tracked = prefs.is_server_enabled(&key);
        table.push(vec![
            Cell::styled(key.as_str(), color::frost),
            Cell::plain(server.label()),
            Cell::styled(if tracked { "yes" } else { "no" }, move |s| {
                color::enabled(s, tracked)
            }),
        ]);
    }
    table.print();

    if !prefs.global_enabled {
        println!(
            "{}",
            color::ash("Notifications are off globally. Turn them on with `dclone notify on`.")
        );
    }

    info!(event = "cli.servers_completed");
    Ok(())
}
