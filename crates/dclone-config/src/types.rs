//! Configuration types.
//!
//! Every field is optional in TOML so that partial user and project files can
//! be layered. Accessor methods resolve the effective value against
//! [`crate::defaults`].

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Top-level configuration, one struct per TOML section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DcloneConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// `[api]`: where the status data comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or(defaults::DEFAULT_API_URL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(defaults::DEFAULT_TIMEOUT_SECS)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            url: override_config.url.clone().or_else(|| base.url.clone()),
            timeout_secs: override_config.timeout_secs.or(base.timeout_secs),
        }
    }
}

/// `[poll]`: polling cadence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollConfig {
    pub interval_secs: Option<u64>,
}

impl PollConfig {
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
            .unwrap_or(defaults::DEFAULT_POLL_INTERVAL_SECS)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            interval_secs: override_config.interval_secs.or(base.interval_secs),
        }
    }
}

/// `[display]`: which core/ladder combination the status view shows.
///
/// Values are kept as strings here; `dclone-core` parses them into its
/// domain enums.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub core: Option<String>,
    pub ladder: Option<String>,
}

impl DisplayConfig {
    pub fn core(&self) -> &str {
        self.core.as_deref().unwrap_or(defaults::DEFAULT_CORE)
    }

    pub fn ladder(&self) -> &str {
        self.ladder.as_deref().unwrap_or(defaults::DEFAULT_LADDER)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            core: override_config.core.clone().or_else(|| base.core.clone()),
            ladder: override_config
                .ladder
                .clone()
                .or_else(|| base.ladder.clone()),
        }
    }
}

/// `[notifications]`: delivery backend selection and baseline seeding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// `auto`, `desktop`, `console` or `none`.
    pub backend: Option<String>,
    /// Seed the progress baseline from the first successful fetch so that
    /// already-elevated servers do not notify on startup.
    pub seed_on_start: Option<bool>,
}

impl NotificationsConfig {
    pub fn backend(&self) -> &str {
        self.backend.as_deref().unwrap_or(defaults::DEFAULT_BACKEND)
    }

    pub fn seed_on_start(&self) -> bool {
        self.seed_on_start.unwrap_or(false)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            backend: override_config
                .backend
                .clone()
                .or_else(|| base.backend.clone()),
            seed_on_start: override_config.seed_on_start.or(base.seed_on_start),
        }
    }
}
