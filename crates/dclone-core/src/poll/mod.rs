//! Periodic fetch, detect, and dispatch.

mod errors;
mod poller;
mod types;

pub use errors::PollError;
pub use poller::Poller;
pub use types::{PollerEvent, PollerSettings, PollerState};
