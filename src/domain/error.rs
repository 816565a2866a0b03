use std::io;

use thiserror::Error;

/// Library-wide error type for agent-stack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON encoding failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Stack name is not present in the catalog.
    #[error("Unknown stack: {0}")]
    UnknownStack(String),

    /// Preset name is not present in the catalog.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Server is not registered in this tool's registry layer.
    #[error("Server '{0}' not found in config")]
    UnknownServer(String),

    /// Embedded catalog asset has an unrecognized shape.
    #[error("Invalid catalog entry '{entry}': {reason}")]
    InvalidCatalog { entry: String, reason: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether this error is a name lookup miss that leaves all state untouched.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            AppError::UnknownStack(_) | AppError::UnknownPreset(_) | AppError::UnknownServer(_)
        )
    }
}
