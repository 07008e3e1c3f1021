//! Cache adapters.

mod lru_occurrence_cache;

pub use lru_occurrence_cache::{CacheStats, LruOccurrenceCache, DEFAULT_CACHE_CAPACITY};
