//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod schedule;

pub use schedule::{GetMonthViewQuery, GetScheduleQuery, MonthView, ScheduleService, ScheduleView};
