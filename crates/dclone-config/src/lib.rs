//! # dclone-config
//!
//! TOML configuration types, loading, and validation for dclone.
//!
//! Depends only on `dclone-paths`.

mod defaults;
mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use defaults::{DEFAULT_API_URL, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};
pub use errors::ConfigError;
pub use loading::{load_hierarchy_from, merge_configs};
pub use types::{ApiConfig, DcloneConfig, DisplayConfig, NotificationsConfig, PollConfig};
pub use validation::{VALID_BACKENDS, VALID_CORES, VALID_LADDERS, validate_config};

impl DcloneConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
