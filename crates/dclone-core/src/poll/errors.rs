//! Polling orchestrator error types.

use crate::errors::DcloneError;

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("Polling task failed: {message}")]
    TaskFailed { message: String },

    #[error("Polling state was lost after an earlier task failure")]
    ContextLost,
}

impl DcloneError for PollError {
    fn error_code(&self) -> &'static str {
        match self {
            PollError::TaskFailed { .. } => "POLL_TASK_FAILED",
            PollError::ContextLost => "POLL_CONTEXT_LOST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let error = PollError::TaskFailed {
            message: "panicked".to_string(),
        };
        assert_eq!(error.to_string(), "Polling task failed: panicked");
        assert_eq!(error.error_code(), "POLL_TASK_FAILED");
        assert_eq!(PollError::ContextLost.error_code(), "POLL_CONTEXT_LOST");
    }
}
