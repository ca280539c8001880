//! Fallback backend that prints notifications to stdout.

use std::io::Write;

use crate::notify::errors::NotifyError;
use crate::notify::traits::NotificationBackend;
use crate::notify::types::NotificationRequest;

pub struct ConsoleNotificationBackend;

impl NotificationBackend for ConsoleNotificationBackend {
    fn name(&self) -> &'static str {
        "console"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn send(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "[{}] {}", request.channel_id, request.title)
            .and_then(|()| {
                for line in request.body.lines() {
                    writeln!(out, "    {}", line)?;
                }
                out.flush()
            })
            .map_err(|e| NotifyError::SendFailed {
                message: format!("stdout write failed: {}", e),
            })
    }
}
