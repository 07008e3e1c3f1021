//! Obligation module - the records the engine schedules.

mod cadence;
mod obligation;
mod record;

pub use cadence::Cadence;
pub use obligation::Obligation;
pub use record::{parse_obligations_json, ObligationRecord};
