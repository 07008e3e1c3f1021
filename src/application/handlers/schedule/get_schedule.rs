//! GetSchedule - query for the due dates of a set of obligations in a window.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::foundation::{IsoDate, ObligationId};
use crate::domain::obligation::Obligation;
use crate::domain::schedule::{
    total_due_by_day, DateRange, GroupedOccurrences, Occurrence, ScheduleError, SearchFilter,
};

use super::ScheduleService;

/// Query for a schedule window.
#[derive(Debug, Clone, Default)]
pub struct GetScheduleQuery {
    /// Inclusive lower bound, `YYYY-MM-DD` (a trailing time part is ignored).
    pub from: String,
    /// Inclusive upper bound.
    pub to: String,
    /// Free-text narrowing over name and notes.
    pub search: Option<String>,
}

impl GetScheduleQuery {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Schedule as shown to the user, after search narrowing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView<'a> {
    pub range: DateRange,
    pub occurrences: Vec<Occurrence<'a>>,
    pub grouped: GroupedOccurrences<'a>,
    pub total_due_by_day: BTreeMap<IsoDate, f64>,
    /// Reflects the whole window, not only what the search kept.
    pub truncated: bool,
    pub truncated_obligations: Vec<ObligationId>,
}

impl<'a> ScheduleView<'a> {
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

impl ScheduleService {
    /// Answers a schedule query over `obligations`.
    ///
    /// # Errors
    /// - `ScheduleError::Validation` if a bound is not a date
    /// - `ScheduleError::InvalidRange` if `from > to`
    pub fn handle<'a>(
        &self,
        obligations: &'a [Obligation],
        query: GetScheduleQuery,
    ) -> Result<ScheduleView<'a>, ScheduleError> {
        let range = DateRange::parse(&query.from, &query.to)?;
        Ok(self.view(obligations, range, query.search.as_deref()))
    }

    pub(super) fn view<'a>(
        &self,
        obligations: &'a [Obligation],
        range: DateRange,
        search: Option<&str>,
    ) -> ScheduleView<'a> {
        let schedule = self.merge(obligations, &range);

        if schedule.truncated {
            warn!(
                from = %range.from(),
                to = %range.to(),
                max_iterations = self.max_iterations(),
                truncated_obligations = schedule.truncated_obligations.len(),
                "schedule truncated"
            );
        }

        let grouped = SearchFilter::filter(&schedule.grouped, search.unwrap_or(""));
        let occurrences = grouped.values().flatten().copied().collect();

        ScheduleView {
            range,
            occurrences,
            total_due_by_day: total_due_by_day(&grouped),
            grouped,
            truncated: schedule.truncated,
            truncated_obligations: schedule.truncated_obligations,
        }
    }
}
