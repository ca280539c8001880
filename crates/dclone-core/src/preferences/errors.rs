//! Preference storage error types.

use crate::errors::DcloneError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error accessing preference store: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Corrupt preference data for '{key}': {message}")]
    Corrupt { key: String, message: String },
}

impl DcloneError for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "STORAGE_IO_ERROR",
            StorageError::Corrupt { .. } => "STORAGE_CORRUPT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt() {
        let error = StorageError::Corrupt {
            key: "notificationSettings".to_string(),
            message: "expected a map".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Corrupt preference data for 'notificationSettings': expected a map"
        );
        assert_eq!(error.error_code(), "STORAGE_CORRUPT");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: StorageError = io_err.into();
        assert_eq!(error.error_code(), "STORAGE_IO_ERROR");
        assert!(!error.is_user_error());
    }
}
