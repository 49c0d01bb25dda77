//! Error types for settings loading and validation
//!
//! The engine's event handlers are infallible; only configuration can fail.

use thiserror::Error;

/// Errors that can occur while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value is out of its accepted range
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

impl From<String> for SettingsError {
    fn from(s: String) -> Self {
        SettingsError::Invalid(s)
    }
}

impl From<&str> for SettingsError {
    fn from(s: &str) -> Self {
        SettingsError::Invalid(s.to_string())
    }
}
