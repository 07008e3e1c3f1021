//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the schedule domain.

mod errors;
mod ids;
mod iso_date;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ObligationId;
pub use iso_date::{days_in_month, IsoDate};
