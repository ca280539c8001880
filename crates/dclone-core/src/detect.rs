//! Progress-increase detection.
//!
//! Compares each tracked row of a fresh batch against the baseline and
//! reports strict increases. The baseline always moves to the newest value,
//! including downward, so a reset followed by a climb fires again.

use std::collections::HashSet;

use serde::Serialize;

use crate::baseline::ProgressBaseline;
use crate::preferences::Preferences;
use crate::servers::{Core, Ladder, Progress, Region, ServerKey, ServerSnapshot};

/// One tracked server whose progress went up since the last observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressIncreaseEvent {
    pub server_key: ServerKey,
    pub region: Region,
    pub ladder: Ladder,
    pub core: Core,
    pub previous_progress: Progress,
    pub new_progress: Progress,
}

/// Detect increases in `batch` for opted-in servers and update `baseline`.
///
/// Returns events in input order, at most one per server key. With the
/// global switch off this is a no-op: no events and the baseline untouched.
/// Rows with unparsable or out-of-range progress are skipped.
pub fn detect(
    batch: &[ServerSnapshot],
    preferences: &Preferences,
    baseline: &mut ProgressBaseline,
) -> Vec<ProgressIncreaseEvent> {
    if !preferences.global_enabled {
        tracing::debug!(event = "core.detect.skipped_globally_disabled");
        return Vec::new();
    }

    let mut events = Vec::new();
    let mut seen: HashSet<ServerKey> = HashSet::new();

    for snapshot in batch {
        let key = snapshot.key();
        if !preferences.is_server_enabled(&key) {
            continue;
        }

        if !seen.insert(key.clone()) {
            tracing::warn!(
                event = "core.detect.duplicate_entry_skipped",
                server = %key,
            );
            continue;
        }

        let new = match snapshot.progress.parse() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    event = "core.detect.malformed_entry_skipped",
                    server = %key,
                    error = %e,
                );
                continue;
            }
        };

        let previous = baseline.get(&key).unwrap_or(Progress::ZERO);
        baseline.record(key.clone(), new);

        if new > previous {
            tracing::info!(
                event = "core.detect.increase_detected",
                server = %key,
                previous = previous.get(),
                new = new.get(),
            );
            events.push(ProgressIncreaseEvent {
                server_key: key,
                region: snapshot.region,
                ladder: snapshot.ladder,
                core: snapshot.core,
                previous_progress: previous,
                new_progress: new,
            });
        }
    }

    tracing::debug!(
        event = "core.detect.pass_completed",
        rows = batch.len(),
        events = events.len(),
    );
    events
}
