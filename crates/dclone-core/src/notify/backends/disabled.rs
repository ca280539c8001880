//! Backend standing in for "notification permission not granted".

use crate::notify::errors::NotifyError;
use crate::notify::traits::NotificationBackend;
use crate::notify::types::NotificationRequest;

pub struct DisabledNotificationBackend;

impl NotificationBackend for DisabledNotificationBackend {
    fn name(&self) -> &'static str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn send(&self, _request: &NotificationRequest) -> Result<(), NotifyError> {
        Err(NotifyError::SendFailed {
            message: "notifications are disabled".to_string(),
        })
    }
}
