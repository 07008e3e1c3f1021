//! Occurrence Aggregator - merges per-obligation enumerations into one schedule.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::{IsoDate, ObligationId};
use crate::domain::obligation::Obligation;

use super::{DateRange, Enumeration, OccurrenceEnumerator};

/// One obligation falling due on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Occurrence<'a> {
    pub date: IsoDate,
    pub obligation: &'a Obligation,
}

/// Occurrences keyed by date, ascending.
pub type GroupedOccurrences<'a> = BTreeMap<IsoDate, Vec<Occurrence<'a>>>;

/// Merged occurrences of many obligations over one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule<'a> {
    /// Ascending by date; ties keep obligation input order.
    pub occurrences: Vec<Occurrence<'a>>,
    /// Same occurrences, grouped per date in the same order.
    pub grouped: GroupedOccurrences<'a>,
    /// At least one obligation hit the iteration cap.
    pub truncated: bool,
    /// Obligations whose enumeration was truncated, in input order.
    pub truncated_obligations: Vec<ObligationId>,
}

impl<'a> Schedule<'a> {
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Sum of minimum payments due per date.
    pub fn total_due_by_day(&self) -> BTreeMap<IsoDate, f64> {
        total_due_by_day(&self.grouped)
    }
}

/// Sum of minimum payments due per date of a grouping.
pub fn total_due_by_day(grouped: &GroupedOccurrences<'_>) -> BTreeMap<IsoDate, f64> {
    grouped
        .iter()
        .map(|(date, occurrences)| {
            let total = occurrences
                .iter()
                .map(|o| o.obligation.minimum_payment())
                .sum::<f64>();
            (*date, total)
        })
        .collect()
}

/// Builds the date-keyed grouping of an already sorted occurrence list.
pub fn group_by_date<'a>(occurrences: &[Occurrence<'a>]) -> GroupedOccurrences<'a> {
    let mut grouped: GroupedOccurrences<'a> = BTreeMap::new();
    for occurrence in occurrences {
        grouped.entry(occurrence.date).or_default().push(*occurrence);
    }
    grouped
}

/// Multi-obligation merge functions.
pub struct OccurrenceAggregator;

impl OccurrenceAggregator {
    /// Enumerates every obligation over `range` and merges the results.
    pub fn merge<'a>(
        obligations: &'a [Obligation],
        range: &DateRange,
        max_iterations: usize,
    ) -> Schedule<'a> {
        Self::merge_with(obligations, |obligation| {
            OccurrenceEnumerator::enumerate_in_range(obligation, range, max_iterations)
        })
    }

    /// Merges enumerations produced by `source`, one call per obligation in
    /// input order.
    ///
    /// # Ordering
    /// The flat list is the concatenation of per-obligation lists, stably
    /// sorted by date, so same-day occurrences keep obligation input order.
    pub fn merge_with<'a, F>(obligations: &'a [Obligation], mut source: F) -> Schedule<'a>
    where
        F: FnMut(&Obligation) -> Enumeration,
    {
        let mut occurrences = Vec::new();
        let mut truncated_obligations = Vec::new();

        for obligation in obligations {
            let enumeration = source(obligation);
            if enumeration.truncated {
                truncated_obligations.push(obligation.id().clone());
            }
            occurrences.extend(
                enumeration
                    .dates
                    .into_iter()
                    .map(|date| Occurrence { date, obligation }),
            );
        }

        // sort_by_key is stable
        occurrences.sort_by_key(|o| o.date);
        let grouped = group_by_date(&occurrences);

        Schedule {
            occurrences,
            grouped,
            truncated: !truncated_obligations.is_empty(),
            truncated_obligations,
        }
    }
}
