//! Six-week month grid for calendar views.

use chrono::{Datelike, Weekday};
use serde::Serialize;

use crate::domain::foundation::{IsoDate, ValidationError};
use crate::domain::schedule::{DateRange, GroupedOccurrences, ScheduleError};

/// Cells in a grid: six rows of seven days.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub date: IsoDate,
    /// False for leading/trailing days of adjacent months.
    pub in_month: bool,
}

/// The 42 dates shown for one month, starting on `week_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Builds the grid for `year`/`month`.
    ///
    /// # Errors
    /// - `OutOfRange` for a month outside 1..=12
    /// - `InvalidFormat` for a year whose grid leaves the representable range
    pub fn build(year: i32, month: u32, week_start: Weekday) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, i64::from(month)));
        }
        let year_out_of_range = || {
            ValidationError::invalid_format("year", format!("{} is outside the supported date range", year))
        };

        let first = IsoDate::from_ymd(year, month, 1).ok_or_else(year_out_of_range)?;
        let lead = (first.as_naive().weekday().num_days_from_monday() + 7
            - week_start.num_days_from_monday())
            % 7;
        let start = first.sub_days(u64::from(lead)).ok_or_else(year_out_of_range)?;

        let cells = (0..GRID_CELLS as u64)
            .map(|offset| {
                start.add_days(offset).map(|date| GridCell {
                    date,
                    in_month: date.month() == month && date.year() == year,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(year_out_of_range)?;

        Ok(Self { year, month, cells })
    }

    /// First to last visible date, for querying exactly what the grid shows.
    pub fn visible_range(&self) -> Result<DateRange, ScheduleError> {
        match (self.cells.first(), self.cells.last()) {
            (Some(first), Some(last)) => DateRange::new(first.date, last.date),
            _ => Err(ValidationError::empty_field("cells").into()),
        }
    }

    /// Rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    /// Number of occurrences per visible cell, in cell order.
    pub fn occurrence_counts(&self, grouped: &GroupedOccurrences<'_>) -> Vec<usize> {
        self.cells
            .iter()
            .map(|cell| grouped.get(&cell.date).map_or(0, Vec::len))
            .collect()
    }
}
