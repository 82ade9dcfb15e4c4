//! Cache statistics tracking.

use std::fmt;

/// Counters tracked by every cache engine.
///
/// Plain integers, not atomics: an engine has exactly one logical owner and
/// every operation takes `&mut self`, so there is nothing to race with.
/// Callers that share an engine through [`SharedCache`] read stats under the
/// same lock that serializes operations.
///
/// [`SharedCache`]: crate::cache::SharedCache
///
/// # Example
/// ```
/// use swapcache::{Cache, LruCache, MemoryStore};
///
/// let mut cache = LruCache::new(MemoryStore::new(), 4);
/// cache.set("a", "1").unwrap();
/// let _ = cache.get("a").unwrap();
///
/// assert_eq!(cache.stats().hits, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of times a key was found in the cache.
    pub hits: u64,

    /// Number of times a key had to be looked for in the backing store.
    pub misses: u64,

    /// Number of entries displaced to make room for another.
    pub evictions: u64,

    /// Number of successful reads from the backing store.
    pub store_reads: u64,

    /// Number of successful writes to the backing store
    /// (eviction write-backs and flushes).
    pub store_writes: u64,
}

impl CacheStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
