//! macOS notification backend using osascript.

use crate::notify::errors::NotifyError;
use crate::notify::traits::NotificationBackend;
use crate::notify::types::{NotificationRequest, Sound};

pub struct MacOsNotificationBackend;

impl MacOsNotificationBackend {
    fn script(request: &NotificationRequest) -> String {
        let mut script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape_applescript(&request.body),
            escape_applescript(&request.title),
        );
        match request.sound {
            Sound::Default => script.push_str(" sound name \"default\""),
        }
        script
    }
}

/// Escape a string for use inside an AppleScript double-quoted literal.
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl NotificationBackend for MacOsNotificationBackend {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn send(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let output = std::process::Command::new("osascript")
            .arg("-e")
            .arg(Self::script(request))
            .output()
            .map_err(|e| NotifyError::SendFailed {
                message: format!("osascript exec failed: {}", e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(NotifyError::SendFailed {
                message: format!("osascript exit {}: {}", output.status, stderr.trim()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::types::{CHANNEL_ID, Trigger};

    #[test]
    fn macos_backend_name() {
        assert_eq!(MacOsNotificationBackend.name(), "macos");
    }

    #[test]
    fn macos_backend_availability_matches_platform() {
        assert_eq!(
            MacOsNotificationBackend.is_available(),
            cfg!(target_os = "macos")
        );
    }

    #[test]
    fn escape_applescript_handles_quotes_and_backslashes() {
        assert_eq!(escape_applescript(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
    }

    #[test]
    fn script_includes_default_sound() {
        let request = NotificationRequest {
            title: "T".to_string(),
            body: "B".to_string(),
            data: serde_json::Value::Null,
            sound: Sound::Default,
            trigger: Trigger::Immediate,
            channel_id: CHANNEL_ID,
        };
        assert_eq!(
            MacOsNotificationBackend::script(&request),
            r#"display notification "B" with title "T" sound name "default""#
        );
    }
}
