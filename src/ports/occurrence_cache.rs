//! Occurrence Cache Port - memoization of per-obligation enumerations.
//!
//! Calendar navigation re-queries the same obligations over the same windows
//! (paging a month forward and back). Implementations store `Enumeration`
//! values keyed by everything that determines them.

use crate::domain::foundation::{IsoDate, ObligationId};
use crate::domain::obligation::{Cadence, Obligation};
use crate::domain::schedule::{DateRange, Enumeration, ScheduleError};

/// Everything an enumeration result depends on.
///
/// Bounds are stored as parsed dates, so ranges that differ only in
/// representation (whitespace, a trailing time component) share one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub obligation_id: ObligationId,
    pub anchor: IsoDate,
    pub cadence: Cadence,
    pub from: IsoDate,
    pub to: IsoDate,
    pub max_iterations: usize,
}

impl CacheKey {
    /// Builds a key from raw ISO bounds, normalizing them.
    ///
    /// # Errors
    /// - `ScheduleError::Validation` if a bound is not a date
    /// - `ScheduleError::InvalidRange` if `from > to`
    pub fn new(
        obligation_id: ObligationId,
        anchor: IsoDate,
        cadence: Cadence,
        from_iso: &str,
        to_iso: &str,
        max_iterations: usize,
    ) -> Result<Self, ScheduleError> {
        let range = DateRange::parse(from_iso, to_iso)?;
        Ok(Self {
            obligation_id,
            anchor,
            cadence,
            from: range.from(),
            to: range.to(),
            max_iterations,
        })
    }

    /// Builds a key for an obligation over an already validated range.
    pub fn for_obligation(obligation: &Obligation, range: &DateRange, max_iterations: usize) -> Self {
        Self {
            obligation_id: obligation.id().clone(),
            anchor: obligation.anchor_due_date(),
            cadence: obligation.cadence(),
            from: range.from(),
            to: range.to(),
            max_iterations,
        }
    }
}

/// Port for memoizing enumerations.
///
/// Implementations must be bounded and must hand out owned copies, so a
/// caller mutating a returned value never changes what the cache holds.
pub trait OccurrenceCache: Send + Sync {
    /// Returns a copy of the cached enumeration, if present.
    fn get(&self, key: &CacheKey) -> Option<Enumeration>;

    /// Stores an enumeration, possibly evicting another entry.
    fn set(&self, key: CacheKey, value: Enumeration);

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    fn clear(&self);
}
