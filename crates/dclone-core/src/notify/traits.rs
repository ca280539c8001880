//! Notification backend trait definition.

use super::errors::NotifyError;
use super::types::NotificationRequest;

/// Delivery primitive for local notifications.
///
/// `is_available` plays the role of "permission granted": when it returns
/// false the dispatcher skips delivery entirely.
pub trait NotificationBackend: Send + Sync {
    /// Short identifier used in logs ("macos", "linux", "console").
    fn name(&self) -> &'static str;

    /// Whether this backend can deliver on the current system.
    fn is_available(&self) -> bool;

    /// Deliver one notification.
    fn send(&self, request: &NotificationRequest) -> Result<(), NotifyError>;
}
