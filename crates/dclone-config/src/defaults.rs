//! Built-in fallback values used when a config field is not set.

pub const DEFAULT_API_URL: &str = "https://diablo2.io/dclone_api.php";

/// Bounded fetch timeout. The upstream API has no documented deadline.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Flat re-poll cadence, applied after every cycle regardless of outcome.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

pub const DEFAULT_CORE: &str = "softcore";
pub const DEFAULT_LADDER: &str = "ladder";

pub const DEFAULT_BACKEND: &str = "auto";
