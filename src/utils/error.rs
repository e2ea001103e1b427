use thiserror::Error;

#[derive(Error, Debug)]
pub enum DealError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to write report '{path}': {source}")]
    ReportWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Filesystem,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DealError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DealError::ConfigReadError { .. }
            | DealError::ConfigValidationError { .. }
            | DealError::MissingConfigError { .. }
            | DealError::InvalidConfigValueError { .. }
            | DealError::SerializationError(_) => ErrorCategory::Configuration,
            DealError::ReportWriteError { .. } => ErrorCategory::Filesystem,
            DealError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    /// 所有錯誤都會中止執行；嚴重程度只影響退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Filesystem => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DealError::ConfigReadError { path, .. } => format!(
                "Check that '{}' exists and is readable, or pass another file with --config",
                path
            ),
            DealError::SerializationError(_) => {
                "Make sure the config file is valid JSON with all required fields".to_string()
            }
            DealError::ConfigValidationError { field, .. }
            | DealError::MissingConfigError { field }
            | DealError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the config file and run again", field)
            }
            DealError::ReportWriteError { path, .. } => format!(
                "Check permissions and free space for '{}', or choose another --output-path",
                path
            ),
            DealError::ProcessingError { .. } => {
                "Run again with --verbose and inspect the logs".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Could not load travel preferences: {}", self),
            ErrorCategory::Filesystem => format!("Could not save the report: {}", self),
            ErrorCategory::Processing => format!("Deal search failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = DealError::MissingConfigError {
            field: "party_size".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("party_size"));
    }

    #[test]
    fn test_write_errors_are_critical() {
        let err = DealError::ReportWriteError {
            path: "out/report.md".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("Could not save the report"));
    }

    #[test]
    fn test_malformed_json_is_a_config_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DealError::from(parse_err);
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
