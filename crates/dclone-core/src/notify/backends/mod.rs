//! Notification backend implementations.

mod console;
mod disabled;
mod linux;
mod macos;

pub use console::ConsoleNotificationBackend;
pub use disabled::DisabledNotificationBackend;
pub use linux::LinuxNotificationBackend;
pub use macos::MacOsNotificationBackend;
