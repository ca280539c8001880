use serde::Serialize;

/// Notification channel every progress alert is posted on.
pub const CHANNEL_ID: &str = "dclone-progress";

/// Sound played with the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    #[default]
    Default,
}

/// When the notification should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    #[default]
    Immediate,
}

/// A fully composed notification, ready for a backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    /// Opaque payload; for progress alerts it echoes the event.
    pub data: serde_json::Value,
    pub sound: Sound,
    pub trigger: Trigger,
    pub channel_id: &'static str,
}
