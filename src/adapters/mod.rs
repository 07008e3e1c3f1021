//! Adapters - Implementations of port interfaces.
//!
//! - `cache` - Bounded in-memory occurrence cache

pub mod cache;

pub use cache::{CacheStats, LruOccurrenceCache, DEFAULT_CACHE_CAPACITY};
