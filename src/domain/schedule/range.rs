//! Inclusive query window.

use serde::Serialize;

use crate::domain::foundation::IsoDate;

use super::ScheduleError;

/// Inclusive `[from, to]` window of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    from: IsoDate,
    to: IsoDate,
}

impl DateRange {
    /// Creates a window, rejecting `from > to`.
    pub fn new(from: IsoDate, to: IsoDate) -> Result<Self, ScheduleError> {
        if from > to {
            return Err(ScheduleError::invalid_range(from, to));
        }
        Ok(Self { from, to })
    }

    /// Parses both bounds with [`IsoDate::normalize_bound`].
    pub fn parse(from: &str, to: &str) -> Result<Self, ScheduleError> {
        let from = IsoDate::normalize_bound("from", from)?;
        let to = IsoDate::normalize_bound("to", to)?;
        Self::new(from, to)
    }

    pub fn from(&self) -> IsoDate {
        self.from
    }

    pub fn to(&self) -> IsoDate {
        self.to
    }

    pub fn contains(&self, date: &IsoDate) -> bool {
        self.from <= *date && *date <= self.to
    }
}
