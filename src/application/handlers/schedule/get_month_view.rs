//! GetMonthView - schedule for the six weeks a month grid shows.

use serde::Serialize;

use crate::domain::calendar::MonthGrid;
use crate::domain::obligation::Obligation;
use crate::domain::schedule::ScheduleError;

use super::{ScheduleService, ScheduleView};

#[derive(Debug, Clone)]
pub struct GetMonthViewQuery {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView<'a> {
    pub grid: MonthGrid,
    /// Occurrences per grid cell, in cell order.
    pub counts: Vec<usize>,
    pub schedule: ScheduleView<'a>,
}

impl ScheduleService {
    /// Builds the grid starting on the configured weekday and fills it with
    /// the schedule of its visible range.
    pub fn month_view<'a>(
        &self,
        obligations: &'a [Obligation],
        query: GetMonthViewQuery,
    ) -> Result<MonthView<'a>, ScheduleError> {
        let grid = MonthGrid::build(query.year, query.month, self.week_start())?;
        let range = grid.visible_range()?;
        let schedule = self.view(obligations, range, query.search.as_deref());
        let counts = grid.occurrence_counts(&schedule.grouped);

        Ok(MonthView {
            grid,
            counts,
            schedule,
        })
    }
}
