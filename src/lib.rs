//! Due Calendar - occurrence engine for recurring obligations
//!
//! Expands bills and debts with a weekly, biweekly or monthly cadence into
//! the concrete due dates inside a query window, merges them across
//! obligations, groups them per day and narrows them by free-text search.
//! A bounded cache memoizes per-obligation enumerations for repeated calendar
//! navigation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
