use clap::ArgMatches;
use tracing::{error, info};

use dclone_core::events;

use super::helpers::{open_preferences, server_key_arg};
use crate::color;

/// `track` / `untrack` (explicit value) and `toggle` (`None`).
pub(crate) fn handle_set_tracking(
    matches: &ArgMatches,
    value: Option<bool>,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = server_key_arg(matches)?;
    let mut store = open_preferences()?;

    info!(event = "cli.track_started", server = %key, value = ?value);

    let result = match value {
        Some(enabled) => store.set_server_enabled(key.clone(), enabled).map(|()| enabled),
        None => store.toggle_server(key.clone()),
    };

    match result {
        Ok(enabled) => {
            let label = key.server().map(|s| s.label()).unwrap_or_default();
            println!(
                "{} {} ({})",
                color::enabled(if enabled { "Tracking" } else { "Not tracking" }, enabled),
                color::frost(key.as_str()),
                label
            );
            if enabled && !store.preferences().global_enabled {
                println!(
                    "  {}",
                    color::ash("Notifications are off globally. Turn them on with `dclone notify on`.")
                );
            }
            info!(event = "cli.track_completed", server = %key, enabled = enabled);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not save preference:"), e);
            error!(event = "cli.track_failed", server = %key, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
