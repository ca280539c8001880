//! Backend selection from the configured `notifications.backend` name.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use super::backends::{
    ConsoleNotificationBackend, DisabledNotificationBackend, LinuxNotificationBackend,
    MacOsNotificationBackend,
};
use super::traits::NotificationBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// First available desktop backend, console otherwise.
    #[default]
    Auto,
    Desktop,
    Console,
    None,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Desktop => "desktop",
            Self::Console => "console",
            Self::None => "none",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "desktop" => Ok(Self::Desktop),
            "console" => Ok(Self::Console),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown notification backend '{}', expected one of: auto, desktop, console, none",
                other
            )),
        }
    }
}

/// Desktop backends in priority order.
fn desktop_backends() -> Vec<Arc<dyn NotificationBackend>> {
    vec![
        Arc::new(MacOsNotificationBackend),
        Arc::new(LinuxNotificationBackend),
    ]
}

fn detect_desktop() -> Option<Arc<dyn NotificationBackend>> {
    desktop_backends().into_iter().find(|b| b.is_available())
}

/// Resolve a backend for `kind`.
///
/// `Desktop` with no usable desktop tool resolves to a backend that reports
/// unavailable, so dispatch skips instead of silently falling back.
pub fn select_backend(kind: BackendKind) -> Arc<dyn NotificationBackend> {
    let backend: Arc<dyn NotificationBackend> = match kind {
        BackendKind::Auto => detect_desktop().unwrap_or_else(|| Arc::new(ConsoleNotificationBackend)),
        BackendKind::Desktop => {
            detect_desktop().unwrap_or_else(|| Arc::new(DisabledNotificationBackend))
        }
        BackendKind::Console => Arc::new(ConsoleNotificationBackend),
        BackendKind::None => Arc::new(DisabledNotificationBackend),
    };
    debug!(
        event = "core.notify.backend_selected",
        requested = %kind,
        backend = backend.name(),
        available = backend.is_available(),
    );
    backend
}
