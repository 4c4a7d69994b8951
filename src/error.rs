//! Error handling for the simulation metrics crate

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Custom error types for the simulation metrics crate
///
/// The cost monitors themselves never fail; errors only arise from the
/// surrounding layers (configuration, report serialization and I/O).
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (report files, directories)
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization errors (JSON export)
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Parsing errors (log levels, environment overrides)
    #[error("Parsing error: {0}")]
    Parse(String),
}

impl MetricsError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new serialization error
    pub fn serialize<S: Into<String>>(message: S) -> Self {
        Self::Serialize(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Serialize(_) => "SERIALIZE",
            Self::Parse(_) => "PARSE",
        }
    }
}
