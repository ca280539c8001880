//! Linux notification backend using notify-send (libnotify).

use crate::notify::errors::NotifyError;
use crate::notify::traits::NotificationBackend;
use crate::notify::types::{NotificationRequest, Sound};

/// Freedesktop sound theme name played for [`Sound::Default`].
const DEFAULT_SOUND_NAME: &str = "message-new-instant";

/// Linux notification backend via `notify-send` (libnotify).
pub struct LinuxNotificationBackend;

impl LinuxNotificationBackend {
    fn args(request: &NotificationRequest) -> Vec<String> {
        let mut args = vec![
            "--app-name=dclone".to_string(),
            format!("--category={}", request.channel_id),
        ];
        match request.sound {
            Sound::Default => {
                args.push(format!("--hint=string:sound-name:{}", DEFAULT_SOUND_NAME));
            }
        }
        args.push(request.title.clone());
        args.push(request.body.clone());
        args
    }
}

impl NotificationBackend for LinuxNotificationBackend {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && which::which("notify-send").is_ok()
    }

    fn send(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let output = std::process::Command::new("notify-send")
            .args(Self::args(request))
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => NotifyError::ToolNotFound {
                    tool: "notify-send".to_string(),
                },
                _ => NotifyError::SendFailed {
                    message: format!("notify-send exec failed: {}", e),
                },
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(NotifyError::SendFailed {
                message: format!("notify-send exit {}: {}", output.status, stderr.trim()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::types::{CHANNEL_ID, Trigger};

    fn request() -> NotificationRequest {
        NotificationRequest {
            title: "Title".to_string(),
            body: "line one\nline two".to_string(),
            data: serde_json::Value::Null,
            sound: Sound::Default,
            trigger: Trigger::Immediate,
            channel_id: CHANNEL_ID,
        }
    }

    #[test]
    fn linux_backend_name() {
        assert_eq!(LinuxNotificationBackend.name(), "linux");
    }

    #[test]
    fn linux_backend_availability_matches_platform() {
        if !cfg!(target_os = "linux") {
            assert!(!LinuxNotificationBackend.is_available());
        }
    }

    #[test]
    fn linux_args_put_title_and_body_last() {
        let args = LinuxNotificationBackend::args(&request());
        assert_eq!(args[0], "--app-name=dclone");
        assert_eq!(args[1], "--category=dclone-progress");
        assert!(args.contains(&"--hint=string:sound-name:message-new-instant".to_string()));
        assert_eq!(&args[args.len() - 2..], ["Title", "line one\nline two"]);
    }
}
