//! Schedule handlers - cached schedule queries over obligations.

mod get_month_view;
mod get_schedule;
mod schedule_service;

pub use get_month_view::{GetMonthViewQuery, MonthView};
pub use get_schedule::{GetScheduleQuery, ScheduleView};
pub use schedule_service::ScheduleService;
