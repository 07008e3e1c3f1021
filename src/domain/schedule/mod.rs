//! Schedule Module - Pure occurrence engine for recurring obligations.
//!
//! # Components
//!
//! - `RecurrenceResolver` - first occurrence of a cadence on or after a date
//! - `OccurrenceEnumerator` - bounded expansion of one obligation over a window
//! - `OccurrenceAggregator` - sorted flat list and date grouping across obligations
//! - `SearchFilter` - free-text narrowing of grouped results
//!
//! All functions are synchronous, deterministic and free of I/O. Memoization
//! lives behind the `OccurrenceCache` port, not here.

mod aggregator;
mod enumerator;
mod errors;
mod range;
mod resolver;
mod search;

pub use aggregator::{
    group_by_date, total_due_by_day, GroupedOccurrences, Occurrence, OccurrenceAggregator,
    Schedule,
};
pub use enumerator::{Enumeration, OccurrenceEnumerator, DEFAULT_MAX_ITERATIONS};
pub use errors::ScheduleError;
pub use range::DateRange;
pub use resolver::RecurrenceResolver;
pub use search::SearchFilter;
