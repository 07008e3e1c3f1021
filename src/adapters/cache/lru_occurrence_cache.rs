//! LRU Occurrence Cache Adapter
//!
//! Fixed-capacity, least-recently-used store for enumeration results. Safe to
//! share across threads; scope one instance per session when callers must not
//! observe each other's entries.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::domain::schedule::Enumeration;
use crate::ports::{CacheKey, OccurrenceCache};

/// Default number of cached enumerations.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Hit/miss counters and occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Bounded in-memory cache backed by [`LruCache`].
#[derive(Debug)]
pub struct LruOccurrenceCache {
    entries: Mutex<LruCache<CacheKey, Enumeration>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LruOccurrenceCache {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache with default capacity.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: entries.len(),
            capacity: entries.cap().get(),
        }
    }

    // Poisoned locks still hold a usable map.
    fn lock(&self) -> MutexGuard<'_, LruCache<CacheKey, Enumeration>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LruOccurrenceCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl OccurrenceCache for LruOccurrenceCache {
    fn get(&self, key: &CacheKey) -> Option<Enumeration> {
        let found = self.lock().get(key).cloned();
        match found {
            Some(_) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(obligation_id = %key.obligation_id, from = %key.from, to = %key.to, "occurrence cache hit");
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(obligation_id = %key.obligation_id, from = %key.from, to = %key.to, "occurrence cache miss");
            }
        }
        found
    }

    fn set(&self, key: CacheKey, value: Enumeration) {
        if let Some((evicted, _)) = self.lock().push(key.clone(), value) {
            if evicted != key {
                debug!(obligation_id = %evicted.obligation_id, "occurrence cache evicted entry");
            }
        }
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
