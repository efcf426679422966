//! Error types for Freightcast

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreightError {
    // Input errors
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // Geographic errors
    #[error("Cannot compute distance from {origin} to {destination}: unknown city")]
    DistanceUnavailable { origin: String, destination: String },

    // Training errors
    #[error("No trainable data for origin {origin}")]
    NoTrainableData { origin: String },

    // Record store errors
    #[error("Record {id} not found")]
    RecordNotFound { id: u64 },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FreightError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for FreightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FreightError>;
