//! Application configuration module
//!
//! Type-safe configuration loaded with the `config` and `dotenvy` crates.
//! Environment variables use the `DUE_CALENDAR` prefix and nested values are
//! separated by double underscores. Every field has a default, so an empty
//! environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use due_calendar::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Iteration cap: {}", config.schedule.max_iterations);
//! ```

mod error;
mod logging;
mod schedule;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use schedule::{ScheduleSettings, CACHE_CAPACITY_LIMIT, MAX_ITERATIONS_LIMIT};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "DUE_CALENDAR";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Occurrence engine settings (iteration cap, cache size, week start)
    #[serde(default)]
    pub schedule: ScheduleSettings,

    /// Tracing output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DUE_CALENDAR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DUE_CALENDAR__SCHEDULE__MAX_ITERATIONS=1000` -> `schedule.max_iterations = 1000`
    /// - `DUE_CALENDAR__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file (format picked by extension), with
    /// environment variables layered on top.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.schedule.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}

fn env_source() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}
