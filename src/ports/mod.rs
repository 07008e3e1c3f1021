//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OccurrenceCache` - Bounded memoization of enumeration results

mod occurrence_cache;

pub use occurrence_cache::{CacheKey, OccurrenceCache};
