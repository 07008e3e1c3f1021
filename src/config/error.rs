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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("max_iterations must be between 1 and {max}, got {actual}")]
    InvalidMaxIterations { max: usize, actual: usize },

    #[error("cache_capacity must be between 1 and {max}, got {actual}")]
    InvalidCacheCapacity { max: usize, actual: usize },

    #[error("Invalid week start day: {0}")]
    InvalidWeekStart(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
