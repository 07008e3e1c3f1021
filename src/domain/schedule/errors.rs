//! Schedule-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, IsoDate, ObligationId, ValidationError};

/// Errors raised at the schedule engine boundary.
///
/// Every variant is a deterministic function of the input; retrying the same
/// call reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// An obligation record or query bound failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The query window is inverted.
    #[error("Invalid range: from {from} is after to {to}")]
    InvalidRange { from: IsoDate, to: IsoDate },

    /// Two records in one batch share an id.
    #[error("Duplicate obligation id: {0}")]
    DuplicateObligation(ObligationId),
}

impl ScheduleError {
    pub fn invalid_range(from: IsoDate, to: IsoDate) -> Self {
        ScheduleError::InvalidRange { from, to }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScheduleError::Validation(err) => ErrorCode::from(err),
            ScheduleError::InvalidRange { .. } => ErrorCode::InvalidRange,
            ScheduleError::DuplicateObligation(_) => ErrorCode::DuplicateObligation,
        }
    }
}

impl From<ScheduleError> for DomainError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::Validation(inner) => inner.into(),
            ScheduleError::InvalidRange { from, to } => {
                DomainError::new(ErrorCode::InvalidRange, format!("from {} is after to {}", from, to))
                    .with_detail("from", from.to_string())
                    .with_detail("to", to.to_string())
            }
            ScheduleError::DuplicateObligation(id) => {
                DomainError::new(ErrorCode::DuplicateObligation, format!("Duplicate obligation id: {}", id))
                    .with_detail("id", id.to_string())
            }
        }
    }
}
