use std::error::Error;

/// Base trait for all application errors
pub trait DcloneError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type DcloneResult<T> = Result<T, Box<dyn DcloneError>>;

impl DcloneError for dclone_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            dclone_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            dclone_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            dclone_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            dclone_config::ConfigError::ConfigParseError { .. }
                | dclone_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}

impl DcloneError for dclone_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            dclone_paths::PathError::HomeNotFound => "PATH_HOME_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load() -> DcloneResult<()> {
        Err(Box::new(dclone_paths::PathError::HomeNotFound))
    }

    #[test]
    fn test_dclone_result_keeps_error_code() {
        let error = load().unwrap_err();
        assert_eq!(error.error_code(), "PATH_HOME_NOT_FOUND");
        assert!(error.is_user_error());
        assert!(error.to_string().starts_with("home directory not found"));
    }

    #[test]
    fn test_config_parse_error() {
        let error = dclone_config::ConfigError::ConfigParseError {
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file: invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_io_error_is_not_user_error() {
        let error = dclone_config::ConfigError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_home_not_found_is_user_error() {
        let error = dclone_paths::PathError::HomeNotFound;
        assert_eq!(error.error_code(), "PATH_HOME_NOT_FOUND");
        assert!(error.is_user_error());
    }
}
