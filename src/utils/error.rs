use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Generation service returned {status}: {message}")]
    ServiceError { status: u16, message: String },

    #[error("Generation service returned no text")]
    EmptyCompletion,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Specialist '{id}' not found")]
    RecordNotFound { id: String },

    #[error("No specialist selected")]
    NoSelection,

    #[error("No generated follow-up draft to copy")]
    NothingToCopy,

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    UserInput,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::ApiError(_)
            | TrackerError::ServiceError { .. }
            | TrackerError::EmptyCompletion => ErrorCategory::Network,
            TrackerError::ConfigError { .. }
            | TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. }
            | TrackerError::MissingConfigError { .. } => ErrorCategory::Configuration,
            TrackerError::SerializationError(_) => ErrorCategory::Data,
            TrackerError::ValidationError { .. }
            | TrackerError::RecordNotFound { .. }
            | TrackerError::NoSelection
            | TrackerError::NothingToCopy => ErrorCategory::UserInput,
            TrackerError::IoError(_) | TrackerError::ClipboardError { .. } => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => match self {
                TrackerError::ClipboardError { .. } => ErrorSeverity::Low,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TrackerError::ApiError(e) if e.is_timeout() => {
                "Increase --timeout-seconds or check network latency".to_string()
            }
            TrackerError::ApiError(_) => "Check network connectivity and --base-url".to_string(),
            TrackerError::ServiceError { status: 401 | 403, .. } => {
                "Set a valid API_KEY environment variable".to_string()
            }
            TrackerError::ServiceError { .. } | TrackerError::EmptyCompletion => {
                "Try again later or choose a different --model".to_string()
            }
            TrackerError::IoError(_) => "Check that the file exists and is readable".to_string(),
            TrackerError::SerializationError(_) => {
                "Check that the seed file is valid JSON in the expected shape".to_string()
            }
            TrackerError::ConfigError { .. }
            | TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
            TrackerError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            TrackerError::ValidationError { .. } => "Type 'help' to see valid commands".to_string(),
            TrackerError::RecordNotFound { .. } => {
                "Use 'list' to see available specialist ids".to_string()
            }
            TrackerError::NoSelection => "Open a specialist first with 'view <id>'".to_string(),
            TrackerError::NothingToCopy => {
                "Wait for the follow-up draft to finish generating".to_string()
            }
            TrackerError::ClipboardError { .. } => {
                "Copy the draft manually from the 'show' output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::ApiError(_) | TrackerError::ServiceError { .. } => {
                "Could not reach the text generation service".to_string()
            }
            TrackerError::EmptyCompletion => "The text generation service returned nothing".to_string(),
            TrackerError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_errors_are_low_severity() {
        let err = TrackerError::RecordNotFound { id: "9".to_string() };
        assert_eq!(err.category(), ErrorCategory::UserInput);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Specialist '9' not found");
    }

    #[test]
    fn test_auth_failure_suggests_api_key() {
        let err = TrackerError::ServiceError {
            status: 401,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.recovery_suggestion().contains("API_KEY"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = TrackerError::MissingConfigError {
            field: "advisory.model".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("advisory.model"));
    }
}
