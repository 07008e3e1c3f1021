//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (dates, IDs, errors)
//! - `obligation` - Obligation records, cadence, and the validation boundary
//! - `schedule` - Pure occurrence engine (resolve, enumerate, merge, filter)
//! - `calendar` - Month grid helper for calendar views

pub mod calendar;
pub mod foundation;
pub mod obligation;
pub mod schedule;
