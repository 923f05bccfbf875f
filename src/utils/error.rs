use crate::core::result::MISSING_ERROR_HANDLER_MESSAGE;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfidentError {
    #[error("{}", MISSING_ERROR_HANDLER_MESSAGE)]
    MissingErrorHandler,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfidentError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ConfidentError::ConfigError { .. }
                | ConfidentError::MissingConfigError { .. }
                | ConfidentError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConfidentError::MissingErrorHandler => {
                "A result was unwrapped before an error handler was bound".to_string()
            }
            ConfidentError::IoError(e) => format!("Could not read or write a file: {}", e),
            ConfidentError::SerializationError(e) => format!("Could not render the report: {}", e),
            ConfidentError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ConfidentError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            ConfidentError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConfidentError::MissingErrorHandler => {
                "Call `on_error` on the result before `unwrap`, even on the success path"
            }
            ConfidentError::IoError(_) => "Check that the path exists and is writable",
            ConfidentError::SerializationError(_) => "Try the text report format",
            ConfidentError::ConfigError { .. } => "Make sure the file is valid TOML",
            ConfidentError::MissingConfigError { .. } => "Add the missing field to the config file",
            ConfidentError::InvalidConfigValueError { .. } => {
                "Fix the value and run the checks again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfidentError>;
