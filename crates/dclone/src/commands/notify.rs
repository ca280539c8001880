use clap::ArgMatches;
use tracing::{error, info};

use dclone_core::events;

use super::helpers::{build_backend, load_config_with_warning, on_off, open_preferences};
use crate::color;

pub(crate) fn handle_notify_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("on", _)) => set_global(true),
        Some(("off", _)) => set_global(false),
        Some(("status", _)) => show_status(),
        _ => {
            error!(event = "cli.notify_unknown_action");
            Err("Unknown notify action".into())
        }
    }
}

fn set_global(enabled: bool) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.notify_set_started", enabled = enabled);
    let mut store = open_preferences()?;

    match store.set_global_enabled(enabled) {
        Ok(()) => {
            println!(
                "Notifications {}.",
                color::enabled(if enabled { "enabled" } else { "disabled" }, enabled)
            );
            let tracked = store
                .preferences()
                .per_server_enabled
                .values()
                .filter(|v| **v)
                .count();
            if enabled && tracked == 0 {
                println!(
                    "  {}",
                    color::ash("No servers tracked yet. Add one with `dclone track <server>`.")
                );
            }
            info!(event = "cli.notify_set_completed", enabled = enabled);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not save preference:"), e);
            error!(event = "cli.notify_set_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn show_status() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_preferences()?;
    let prefs = store.preferences();
    let config = load_config_with_warning();
    let backend = build_backend(&config)?;

    println!(
        "{} {}",
        color::bold("Notifications:"),
        color::enabled(on_off(prefs.global_enabled), prefs.global_enabled)
    );
    let tracked: Vec<&str> = prefs
        .per_server_enabled
        .iter()
        .filter(|(_, on)| **on)
        .map(|(key, _)| key.as_str())
        .collect();
    println!(
        "{} {}",
        color::bold("Tracked:"),
        if tracked.is_empty() {
            color::ash("none")
        } else {
            color::frost(&tracked.join(", "))
        }
    );
    println!(
        "{} {} ({})",
        color::bold("Backend:"),
        config.notifications.backend(),
        if backend.is_available() {
            color::verdant(backend.name())
        } else {
            color::ash("unavailable")
        }
    );
    Ok(())
}
