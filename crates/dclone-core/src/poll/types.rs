use std::time::Duration;

use crate::detect::ProgressIncreaseEvent;
use crate::servers::ServerSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerSettings {
    /// Flat delay between the end of one cycle and the start of the next.
    pub interval: Duration,
    /// Seed the baseline from the first successful fetch instead of
    /// detecting against an empty baseline.
    pub seed_on_start: bool,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            seed_on_start: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Idle,
    Polling,
}

/// What a completed cycle reports back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PollerEvent {
    /// A fetch succeeded; the full decoded batch.
    StatusUpdated { snapshots: Vec<ServerSnapshot> },
    /// Tracked progress went up. `delivered` counts notifications sent.
    ProgressIncreased {
        events: Vec<ProgressIncreaseEvent>,
        delivered: usize,
    },
    /// A non-rate-limit fetch failure the user should see.
    Alert { message: String },
}
