//! Row-level data-quality errors.

use crate::errors::DcloneError;

/// A single snapshot row that cannot be used. The row is skipped; the rest of
/// the batch is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("progress {value} is outside 0..=6")]
    ProgressOutOfRange { value: i64 },

    #[error("progress '{value}' is not an integer")]
    ProgressUnparsable { value: String },

    #[error("timestamp '{value}' is not an integer")]
    TimestampUnparsable { value: String },
}

impl DcloneError for EntryError {
    fn error_code(&self) -> &'static str {
        match self {
            EntryError::ProgressOutOfRange { .. } => "ENTRY_PROGRESS_OUT_OF_RANGE",
            EntryError::ProgressUnparsable { .. } => "ENTRY_PROGRESS_UNPARSABLE",
            EntryError::TimestampUnparsable { .. } => "ENTRY_TIMESTAMP_UNPARSABLE",
        }
    }
}
