//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.dclone/config.toml` (global user preferences)
//! 3. **Project config** - `./.dclone/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the CLI)

use crate::errors::ConfigError;
use crate::types::{ApiConfig, DcloneConfig, DisplayConfig, NotificationsConfig, PollConfig};
use crate::validation::validate_config;
use std::fs;
use std::path::Path;

/// Load configuration from the hierarchy of config files.
///
/// Missing config files are not errors. Parse and validation failures are.
pub fn load_hierarchy() -> Result<DcloneConfig, ConfigError> {
    let paths =
        dclone_paths::DclonePaths::resolve().map_err(|e| ConfigError::InvalidConfiguration {
            message: e.to_string(),
        })?;
    let project_root = std::env::current_dir()?;

    load_hierarchy_from(
        &paths.user_config(),
        &dclone_paths::DclonePaths::project_config(&project_root),
    )
}

/// Load and merge a user and a project config file from explicit paths.
pub fn load_hierarchy_from(
    user_path: &Path,
    project_path: &Path,
) -> Result<DcloneConfig, ConfigError> {
    let mut config = DcloneConfig::default();

    if let Some(user_config) = load_config_file(user_path)? {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_config_file(project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    tracing::debug!(
        event = "config.load_completed",
        user_config = %user_path.display(),
        project_config = %project_path.display(),
    );

    Ok(config)
}

/// Load a configuration file. Returns `Ok(None)` when the file does not exist.
fn load_config_file(path: &Path) -> Result<Option<DcloneConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::IoError {
                source: std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)),
            });
        }
    };

    let config: DcloneConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: DcloneConfig, override_config: DcloneConfig) -> DcloneConfig {
    DcloneConfig {
        api: ApiConfig::merge(&base.api, &override_config.api),
        poll: PollConfig::merge(&base.poll, &override_config.poll),
        display: DisplayConfig::merge(&base.display, &override_config.display),
        notifications: NotificationsConfig::merge(
            &base.notifications,
            &override_config.notifications,
        ),
    }
}
