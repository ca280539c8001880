//! dclone-core: Diablo Clone progress tracking engine
//!
//! Polls the dclone status API, detects progress increases on servers the
//! user opted into, and dispatches local notifications. Used by the `dclone`
//! CLI.
//!
//! # Main Entry Points
//!
//! - [`detect`](mod@detect) - Progress-increase detection against a [`ProgressBaseline`]
//! - [`notify`] - Notification composition, dispatch and backends
//! - [`poll`] - The Idle/Polling orchestrator
//! - [`preferences`] - Persisted notification preferences
//! - [`fetch`] - HTTP status source and wire decoding
//! - [`status`] - Status view filtering and formatting

pub mod baseline;
pub mod detect;
pub mod errors;
pub mod events;
pub mod fetch;
pub mod logging;
pub mod notify;
pub mod poll;
pub mod preferences;
pub mod servers;
pub mod status;

pub use baseline::ProgressBaseline;
pub use detect::{ProgressIncreaseEvent, detect};
pub use errors::{DcloneError, DcloneResult};
pub use fetch::{FetchError, HttpStatusSource, StatusSource};
pub use notify::{BackendKind, NotificationBackend, NotifyError, dispatch, select_backend};
pub use poll::{PollError, Poller, PollerEvent, PollerSettings, PollerState};
pub use preferences::{
    JsonFileStore, KeyValueStore, MemoryStore, PreferenceStore, Preferences, StorageError,
};
pub use servers::{
    Core, EntryError, Ladder, Progress, RawProgress, Region, Server, ServerKey, ServerSnapshot,
};

// Re-export config types from dclone-config
pub use dclone_config::{ConfigError, DcloneConfig};

// Re-export logging initialization
pub use logging::init_logging;
