//! ScheduleService - memoizing front for the occurrence engine.
//!
//! Holds the per-query iteration cap, the grid's first weekday and a shared
//! `OccurrenceCache`. Each obligation's enumeration is looked up before the
//! engine runs, then merged with the same code the uncached path uses.

use chrono::Weekday;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::adapters::LruOccurrenceCache;
use crate::config::{ScheduleSettings, ValidationError as ConfigValidationError};
use crate::domain::obligation::Obligation;
use crate::domain::schedule::{DateRange, Enumeration, OccurrenceAggregator, OccurrenceEnumerator, Schedule};
use crate::ports::{CacheKey, OccurrenceCache};

pub struct ScheduleService {
    cache: Arc<dyn OccurrenceCache>,
    max_iterations: usize,
    week_start: Weekday,
}

impl ScheduleService {
    pub fn new(cache: Arc<dyn OccurrenceCache>, max_iterations: usize, week_start: Weekday) -> Self {
        Self {
            cache,
            max_iterations,
            week_start,
        }
    }

    /// Builds a service from validated settings around a shared cache.
    pub fn from_settings(
        settings: &ScheduleSettings,
        cache: Arc<dyn OccurrenceCache>,
    ) -> Result<Self, ConfigValidationError> {
        settings.validate()?;
        Ok(Self::new(cache, settings.max_iterations, settings.week_start()?))
    }

    /// Builds a service with its own LRU cache sized from settings.
    pub fn with_lru_cache(settings: &ScheduleSettings) -> Result<Self, ConfigValidationError> {
        let cache = Arc::new(LruOccurrenceCache::new(settings.cache_capacity));
        Self::from_settings(settings, cache)
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn cache(&self) -> &Arc<dyn OccurrenceCache> {
        &self.cache
    }

    /// Enumerates one obligation, consulting the cache first.
    pub fn enumerate(&self, obligation: &Obligation, range: &DateRange) -> Enumeration {
        let key = CacheKey::for_obligation(obligation, range, self.max_iterations);
        if let Some(cached) = self.cache.get(&key) {
            if cached.truncated {
                warn!(
                    obligation_id = %obligation.id(),
                    from = %range.from(),
                    to = %range.to(),
                    max_iterations = self.max_iterations,
                    "cached occurrence enumeration is truncated"
                );
            }
            return cached;
        }

        let enumeration = OccurrenceEnumerator::enumerate_in_range(obligation, range, self.max_iterations);
        debug!(
            obligation_id = %obligation.id(),
            count = enumeration.len(),
            truncated = enumeration.truncated,
            "enumerated obligation"
        );
        self.cache.set(key, enumeration.clone());
        enumeration
    }

    /// Merges all obligations over `range` through the cache.
    pub fn merge<'a>(&self, obligations: &'a [Obligation], range: &DateRange) -> Schedule<'a> {
        OccurrenceAggregator::merge_with(obligations, |obligation| self.enumerate(obligation, range))
    }
}
