//! Servers, their string keys, and progress snapshots.

pub mod errors;
pub mod types;

pub use errors::EntryError;
pub use types::{
    Core, Ladder, MAX_PROGRESS, Progress, RawProgress, Region, Server, ServerKey, ServerSnapshot,
};
