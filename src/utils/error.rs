use crate::domain::model::FailureKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MuhuratError {
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    #[error("API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Muhurat service reported status '{status}'")]
    ApplicationStatus { status: String },

    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MuhuratError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Failure class used for diagnostics; the page only ever shows one message.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingInput { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => FailureKind::Validation,
            Self::Network(_) | Self::IoError(_) => FailureKind::Network,
            Self::ApplicationStatus { .. } => FailureKind::ApplicationStatus,
            Self::MalformedResponse { .. } | Self::SerializationError(_) => {
                FailureKind::MalformedResponse
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingInput { field } => format!("Please provide a value for {}", field),
            Self::Network(_) => "Could not reach the muhurat service".to_string(),
            Self::ApplicationStatus { .. } | Self::MalformedResponse { .. } => {
                "The muhurat service returned an unusable answer".to_string()
            }
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::SerializationError(_) => "Could not read JSON data".to_string(),
            Self::ConfigError { message } => message.clone(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MuhuratError>;
