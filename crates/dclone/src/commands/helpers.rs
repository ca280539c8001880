use std::time::Duration;

use clap::ArgMatches;
use tracing::{error, warn};

use dclone_config::{ConfigError, DcloneConfig};
use dclone_core::events;
use dclone_core::{
    BackendKind, Core, HttpStatusSource, JsonFileStore, Ladder, NotificationBackend,
    PreferenceStore, ServerKey, select_backend,
};
use dclone_paths::DclonePaths;

use crate::color;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if loading fails, but tells the user on stderr
/// and logs `cli.config.load_failed`.
pub fn load_config_with_warning() -> DcloneConfig {
    match DcloneConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => fall_back_to_defaults(&e),
    }
}

/// Like [`load_config_with_warning`], but values that parse yet fail
/// validation are a hard error for commands that act on them.
pub fn load_valid_config() -> Result<DcloneConfig, Box<dyn std::error::Error>> {
    match DcloneConfig::load_hierarchy() {
        Ok(config) => Ok(config),
        Err(e @ ConfigError::InvalidConfiguration { .. }) => {
            eprintln!("{} {}", color::error("Invalid configuration:"), e);
            error!(event = "cli.config.validation_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
        Err(e) => Ok(fall_back_to_defaults(&e)),
    }
}

fn fall_back_to_defaults(e: &ConfigError) -> DcloneConfig {
    eprintln!(
        "{} Could not load config: {}. Using defaults.\n  {}",
        color::warning("Warning:"),
        e,
        color::hint("Tip: Check ~/.dclone/config.toml and ./.dclone/config.toml for syntax errors."),
    );
    warn!(
        event = "cli.config.load_failed",
        error = %e,
        "Config load failed, using defaults"
    );
    DcloneConfig::default()
}

pub fn open_preferences() -> Result<PreferenceStore<JsonFileStore>, Box<dyn std::error::Error>> {
    let paths = DclonePaths::resolve().map_err(|e| {
        eprintln!("{} {}", color::error("Cannot locate preferences:"), e);
        events::log_app_error(&e);
        e
    })?;
    Ok(PreferenceStore::open(JsonFileStore::new(
        paths.preferences_file(),
    )))
}

/// Core and ladder from `--core`/`--ladder`, falling back to `[display]`.
pub fn resolve_selection(
    matches: &ArgMatches,
    config: &DcloneConfig,
) -> Result<(Core, Ladder), Box<dyn std::error::Error>> {
    let core_arg = matches
        .get_one::<String>("core")
        .map(String::as_str)
        .unwrap_or(config.display.core());
    let ladder_arg = matches
        .get_one::<String>("ladder")
        .map(String::as_str)
        .unwrap_or(config.display.ladder());

    let core: Core = core_arg.parse()?;
    let ladder: Ladder = ladder_arg.parse()?;
    Ok((core, ladder))
}

pub fn build_source(config: &DcloneConfig) -> Result<HttpStatusSource, Box<dyn std::error::Error>> {
    HttpStatusSource::new(
        config.api.url(),
        Duration::from_secs(config.api.timeout_secs()),
    )
    .map_err(|e| {
        eprintln!("{} {}", color::error("Cannot create HTTP client:"), e);
        events::log_app_error(&e);
        e.into()
    })
}

pub fn build_backend(
    config: &DcloneConfig,
) -> Result<std::sync::Arc<dyn NotificationBackend>, Box<dyn std::error::Error>> {
    let kind: BackendKind = config.notifications.backend().parse()?;
    Ok(select_backend(kind))
}

/// Single-threaded runtime for one-shot and watch commands.
pub fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Parse a catalog server key from the positional `server` argument.
pub fn server_key_arg(matches: &ArgMatches) -> Result<ServerKey, Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("server")
        .ok_or("Server argument is required")?;
    match ServerKey::parse(raw) {
        Some(key) => Ok(key),
        None => {
            eprintln!("{} '{}'", color::error("Unknown server"), raw);
            eprintln!(
                "  {}",
                color::hint("Run `dclone servers` to list valid keys.")
            );
            warn!(event = "cli.server_key_invalid", server = raw.as_str());
            Err(format!("Unknown server '{}'", raw).into())
        }
    }
}

pub fn now_epoch() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
