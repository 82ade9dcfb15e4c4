//! Whole-call mutual exclusion for a shared cache instance.

use parking_lot::Mutex;

use crate::cache::{Cache, CacheStats};
use crate::common::Result;

/// A cache behind a single mutual-exclusion lock.
///
/// The engines assume exactly one logical owner: all three policies mutate
/// shared entry state (recency order, reference bits, dirty flags) as part
/// of **read** operations, not only writes. So sharing an instance across
/// threads requires one lock held for the duration of each `get`/`set`/
/// `flush` call, which is exactly what this wrapper does.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use swapcache::{LruCache, MemoryStore, SharedCache};
///
/// let cache = Arc::new(SharedCache::new(LruCache::new(MemoryStore::new(), 8)));
/// cache.set("a", "1").unwrap();
/// assert_eq!(cache.get("a").unwrap(), "1");
/// ```
pub struct SharedCache<C> {
    inner: Mutex<C>,
}

impl<C: Cache> SharedCache<C> {
    /// Wrap a cache for shared use.
    pub fn new(cache: C) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Read the value for `key`. Holds the lock for the whole call,
    /// including any backing-store fetch.
    pub fn get(&self, key: &str) -> Result<String> {
        self.inner.lock().get(key)
    }

    /// Write `value` under `key`. Holds the lock for the whole call,
    /// including any eviction write-back.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.lock().set(key, value)
    }

    /// Write every dirty entry back to the backing store.
    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// A copy of the engine's counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Unwrap the inner cache.
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}
