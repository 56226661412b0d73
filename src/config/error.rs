//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Confidence threshold must be between 0 and 1, got {0}")]
    InvalidConfidenceThreshold(f64),

    #[error("Detail attempts must be at least 1")]
    InvalidDetailAttempts,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
