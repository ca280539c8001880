use std::sync::Arc;
use std::time::Duration;

use clap::ArgMatches;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use dclone_core::events;
use dclone_core::status::filter_view;
use dclone_core::{Core, Ladder, Poller, PollerEvent, PollerSettings, ProgressIncreaseEvent};

use super::helpers::{
    build_backend, build_source, load_valid_config, now_epoch, on_off, open_preferences,
    resolve_selection, runtime,
};
use super::status::print_selection;
use crate::color;

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_valid_config()?;
    let (core, ladder) = resolve_selection(matches, &config)?;
    let interval_secs = matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or(config.poll.interval_secs());

    let source = Arc::new(build_source(&config)?);
    let backend = build_backend(&config)?;
    let preferences = open_preferences()?;
    let global_enabled = preferences.preferences().global_enabled;

    let settings = PollerSettings {
        interval: Duration::from_secs(interval_secs),
        seed_on_start: config.notifications.seed_on_start(),
    };

    println!(
        "Watching {} every {}s (notifications: {}, backend: {}). Press Ctrl-C to stop.",
        color::bold(&format!("{} | {}", ladder, core)),
        interval_secs,
        color::enabled(on_off(global_enabled), global_enabled),
        backend.name(),
    );
    info!(
        event = "cli.watch_started",
        interval_secs = interval_secs,
        backend = backend.name(),
        seed_on_start = settings.seed_on_start,
    );

    let (mut poller, mut rx) = Poller::new(source, backend, preferences, settings);

    runtime()?.block_on(async move {
        let shutdown = CancellationToken::new();
        tokio::spawn(wait_for_shutdown_signal(shutdown.clone()));

        poller.enable().await.map_err(|e| {
            eprintln!("{} {}", color::error("Could not start polling:"), e);
            events::log_app_error(&e);
            e
        })?;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                event = rx.recv() => match event {
                    Some(event) => render_event(event, core, ladder),
                    None => break,
                },
            }
        }

        println!("{}", color::ash("Stopping..."));
        if let Err(e) = poller.shutdown().await {
            eprintln!("{} {}", color::error("Polling task failed:"), e);
            error!(event = "cli.watch_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }

        info!(event = "cli.watch_completed");
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

fn render_event(event: PollerEvent, core: Core, ladder: Ladder) {
    match event {
        PollerEvent::StatusUpdated { snapshots } => {
            let rows = filter_view(&snapshots, core, ladder);
            let stamp = chrono::Local::now().format("%H:%M:%S").to_string();
            println!();
            println!("{}", color::ash(&format!("Updated {}", stamp)));
            print_selection(&rows, core, ladder, now_epoch());
        }
        PollerEvent::ProgressIncreased { events, delivered } => {
            for event in &events {
                println!("{}", color::gold(&increase_line(event)));
            }
            if delivered < events.len() {
                println!(
                    "  {}",
                    color::ash(&format!(
                        "{} of {} notifications delivered",
                        delivered,
                        events.len()
                    ))
                );
            }
        }
        PollerEvent::Alert { message } => {
            eprintln!("{} {}", color::warning("Warning:"), message);
        }
    }
}

fn increase_line(event: &ProgressIncreaseEvent) -> String {
    format!(
        "\u{25B2} {} {} {} {} \u{2192} {}",
        event.region, event.ladder, event.core, event.previous_progress, event.new_progress
    )
}

/// Wait for SIGINT (Ctrl-C) or SIGTERM, then cancel `token`.
async fn wait_for_shutdown_signal(token: CancellationToken) {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {
                        info!(event = "cli.watch.signal_received", signal = "SIGINT");
                    }
                    _ = sigterm.recv() => {
                        info!(event = "cli.watch.signal_received", signal = "SIGTERM");
                    }
                }
            }
            Err(e) => {
                warn!(event = "cli.watch.sigterm_register_failed", error = %e);
                ctrl_c.await.ok();
                info!(event = "cli.watch.signal_received", signal = "SIGINT");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!(event = "cli.watch.signal_received", signal = "SIGINT");
    }

    token.cancel();
}
