//! Configuration validation logic.

use crate::defaults::MAX_TIMEOUT_SECS;
use crate::errors::ConfigError;
use crate::types::DcloneConfig;

pub const VALID_CORES: [&str; 2] = ["softcore", "hardcore"];
pub const VALID_LADDERS: [&str; 2] = ["ladder", "non-ladder"];
pub const VALID_BACKENDS: [&str; 4] = ["auto", "desktop", "console", "none"];

/// Validate a DcloneConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - API URL must be http(s)
/// - Fetch timeout must be between 1 and 300 seconds
/// - Poll interval must be at least one second
/// - Display core/ladder and notification backend must be known names
pub fn validate_config(config: &DcloneConfig) -> Result<(), ConfigError> {
    let url = config.api.url();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(invalid(format!(
            "Invalid API url '{}'. Must start with http:// or https://",
            url
        )));
    }

    let timeout = config.api.timeout_secs();
    if timeout == 0 || timeout > MAX_TIMEOUT_SECS {
        return Err(invalid(format!(
            "Invalid api.timeout_secs {}. Must be between 1 and {}",
            timeout, MAX_TIMEOUT_SECS
        )));
    }

    if config.poll.interval_secs() == 0 {
        return Err(invalid(
            "Invalid poll.interval_secs 0. Must be at least 1".to_string(),
        ));
    }

    check_one_of("display.core", config.display.core(), &VALID_CORES)?;
    check_one_of("display.ladder", config.display.ladder(), &VALID_LADDERS)?;
    check_one_of(
        "notifications.backend",
        config.notifications.backend(),
        &VALID_BACKENDS,
    )?;

    Ok(())
}

fn check_one_of(field: &str, value: &str, valid: &[&str]) -> Result<(), ConfigError> {
    if valid.contains(&value.to_lowercase().as_str()) {
        return Ok(());
    }
    Err(invalid(format!(
        "Invalid {} '{}'. Valid options: {}",
        field,
        value,
        valid.join(", ")
    )))
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidConfiguration { message }
}
