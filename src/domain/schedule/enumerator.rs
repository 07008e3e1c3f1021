//! Occurrence Enumerator - bounded expansion of one obligation over a window.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::IsoDate;
use crate::domain::obligation::{Cadence, Obligation};

use super::{DateRange, RecurrenceResolver};

/// Default cap on occurrences produced for a single obligation.
pub const DEFAULT_MAX_ITERATIONS: usize = 400;

/// Due dates of one obligation inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enumeration {
    /// Ascending, without duplicates.
    pub dates: Vec<IsoDate>,
    /// The iteration cap cut the result short; `dates` is incomplete.
    pub truncated: bool,
}

impl Enumeration {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Expands obligations into concrete due dates.
pub struct OccurrenceEnumerator;

impl OccurrenceEnumerator {
    /// Enumerates every occurrence of `obligation` inside `range`.
    ///
    /// # Algorithm
    /// Seed with the first occurrence on or after `range.from`, then step by
    /// cadence while the seed is within `range.to` and fewer than
    /// `max_iterations` dates were emitted.
    ///
    /// # Edge Cases
    /// - `Cadence::None`: at most the anchor itself
    /// - Anchor after `range.to`: empty
    /// - Cap reached with more in range: `truncated = true`, exactly
    ///   `max_iterations` dates
    /// - `max_iterations == 0`: empty, truncated if anything was in range
    pub fn enumerate_in_range(
        obligation: &Obligation,
        range: &DateRange,
        max_iterations: usize,
    ) -> Enumeration {
        let enumeration = Self::enumerate_cadence(
            obligation.anchor_due_date(),
            obligation.cadence(),
            range,
            max_iterations,
        );

        if enumeration.truncated {
            warn!(
                obligation_id = %obligation.id(),
                cadence = %obligation.cadence(),
                from = %range.from(),
                to = %range.to(),
                max_iterations,
                "occurrence enumeration truncated"
            );
        }

        enumeration
    }

    /// Same as [`Self::enumerate_in_range`] for a bare anchor and cadence.
    pub fn enumerate_cadence(
        anchor: IsoDate,
        cadence: Cadence,
        range: &DateRange,
        max_iterations: usize,
    ) -> Enumeration {
        let mut dates = Vec::new();
        let mut next = RecurrenceResolver::next_on_or_after(anchor, cadence, range.from());

        while let Some(seed) = next {
            if seed > range.to() {
                break;
            }
            if dates.len() >= max_iterations {
                return Enumeration {
                    dates,
                    truncated: true,
                };
            }
            dates.push(seed);
            next = RecurrenceResolver::following(anchor, cadence, seed);
        }

        Enumeration {
            dates,
            truncated: false,
        }
    }
}
