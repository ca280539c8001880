//! Progress notification composition and dispatch.
//!
//! Best-effort: delivery failures are logged per event and never propagate.
//! Backends implement [`NotificationBackend`]; [`registry::select_backend`]
//! resolves one from configuration.

pub mod backends;
pub mod errors;
pub mod registry;
pub mod traits;
pub mod types;

pub use errors::NotifyError;
pub use registry::{BackendKind, select_backend};
pub use traits::NotificationBackend;
pub use types::{CHANNEL_ID, NotificationRequest, Sound, Trigger};

use tracing::{info, warn};

use crate::detect::ProgressIncreaseEvent;

pub const NOTIFICATION_TITLE: &str = "Diablo Clone Progress Update!";

/// Build the notification for one progress increase.
pub fn compose(event: &ProgressIncreaseEvent) -> NotificationRequest {
    let body = format!(
        "{} {} {}\nProgress: {} \u{2192} {}",
        event.region, event.ladder, event.core, event.previous_progress, event.new_progress
    );
    let data = serde_json::json!({
        "serverKey": event.server_key.as_str(),
        "region": event.region.name(),
        "ladder": event.ladder.name(),
        "core": event.core.name(),
        "previousProgress": event.previous_progress.get(),
        "currentProgress": event.new_progress.get(),
    });
    NotificationRequest {
        title: NOTIFICATION_TITLE.to_string(),
        body,
        data,
        sound: Sound::Default,
        trigger: Trigger::Immediate,
        channel_id: CHANNEL_ID,
    }
}

/// Deliver one notification per event through `backend`.
///
/// An unavailable backend skips the whole batch with a single log line. A
/// failed delivery is logged and the rest of the batch still goes out.
/// Returns the number of notifications delivered.
pub fn dispatch(events: &[ProgressIncreaseEvent], backend: &dyn NotificationBackend) -> usize {
    if events.is_empty() {
        return 0;
    }

    if !backend.is_available() {
        info!(
            event = "core.notify.dispatch_skipped",
            backend = backend.name(),
            count = events.len(),
            reason = "backend unavailable",
        );
        return 0;
    }

    let mut delivered = 0;
    for event in events {
        let request = compose(event);
        match backend.send(&request) {
            Ok(()) => {
                delivered += 1;
                info!(
                    event = "core.notify.send_completed",
                    backend = backend.name(),
                    server = %event.server_key,
                );
            }
            Err(e) => {
                warn!(
                    event = "core.notify.send_failed",
                    backend = backend.name(),
                    server = %event.server_key,
                    error = %e,
                );
            }
        }
    }
    delivered
}
