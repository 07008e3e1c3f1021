//! Schedule engine configuration

use chrono::Weekday;
use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::DEFAULT_CACHE_CAPACITY;
use crate::domain::schedule::DEFAULT_MAX_ITERATIONS;

/// Upper bound accepted for `max_iterations`.
pub const MAX_ITERATIONS_LIMIT: usize = 100_000;

/// Upper bound accepted for `cache_capacity`.
pub const CACHE_CAPACITY_LIMIT: usize = 100_000;

/// Schedule engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSettings {
    /// Per-obligation occurrence cap for one query
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Number of memoized enumerations kept per cache instance
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// First day of the week in month grids (e.g. `sunday`, `mon`)
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

impl ScheduleSettings {
    /// Parsed first weekday of calendar grids.
    pub fn week_start(&self) -> Result<Weekday, ValidationError> {
        self.week_start
            .trim()
            .parse::<Weekday>()
            .map_err(|_| ValidationError::InvalidWeekStart(self.week_start.clone()))
    }

    /// Validate schedule configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(ValidationError::InvalidMaxIterations {
                max: MAX_ITERATIONS_LIMIT,
                actual: self.max_iterations,
            });
        }
        if self.cache_capacity == 0 || self.cache_capacity > CACHE_CAPACITY_LIMIT {
            return Err(ValidationError::InvalidCacheCapacity {
                max: CACHE_CAPACITY_LIMIT,
                actual: self.cache_capacity,
            });
        }
        self.week_start()?;
        Ok(())
    }
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            cache_capacity: default_cache_capacity(),
            week_start: default_week_start(),
        }
    }
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_week_start() -> String {
    "sunday".to_string()
}
