//! LRU (Least-Recently-Used) cache engine.

use std::collections::VecDeque;

use crate::cache::{Cache, CacheStats, Entry};
use crate::common::Result;
use crate::storage::BackingStore;

/// A write-back cache that evicts the least-recently-used entry.
///
/// Entries live in a recency-ordered list with the most-recently-used entry
/// at the front. Every hit (read or write) moves the entry to the front;
/// when the cache is full, the single entry at the back is the only eviction
/// candidate and is written back first if dirty.
///
/// Lookup is a linear scan. Capacities here are small enough that the scan
/// is the simplest thing that works, and it keeps the recency list as the
/// one source of truth.
///
/// # Example
/// ```
/// use swapcache::{Cache, LruCache, MemoryStore};
///
/// let mut cache = LruCache::new(MemoryStore::new(), 2);
/// cache.set("a", "1").unwrap();
/// assert_eq!(cache.get("a").unwrap(), "1");
/// ```
pub struct LruCache<S> {
    /// The persistent layer this cache fronts.
    store: S,

    /// Maximum number of entries, immutable for the instance's lifetime.
    capacity: usize,

    /// Recency-ordered entries (front = most recently used).
    entries: VecDeque<Entry>,

    stats: CacheStats,
}

impl<S: BackingStore> LruCache<S> {
    /// Create a cache fronting `store`, holding at most `capacity` entries.
    ///
    /// Capacity 0 is a pass-through: every operation forwards straight to
    /// the store.
    pub fn new(store: S, capacity: usize) -> Self {
        Self {
            store,
            capacity,
            entries: VecDeque::with_capacity(capacity),
            stats: CacheStats::new(),
        }
    }

    /// Give the backing store back, discarding cached entries.
    ///
    /// Dirty entries are NOT flushed; call [`Cache::flush`] first if they
    /// should survive.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Move the entry at `idx` to the most-recently-used position.
    fn promote(&mut self, idx: usize) {
        if idx == 0 {
            return;
        }
        if let Some(entry) = self.entries.remove(idx) {
            self.entries.push_front(entry);
        }
    }

    /// Make room if needed, then insert at the most-recently-used position.
    ///
    /// Shared by the `get`-miss and `set`-miss paths; only the dirty flag
    /// of the new entry differs between them.
    fn insert_mru(&mut self, key: &str, value: &str, dirty: bool) -> Result<()> {
        if self.entries.len() == self.capacity {
            self.evict_lru()?;
        }
        self.entries.push_front(Entry::new(key, value, dirty));
        Ok(())
    }

    /// Write back the least-recently-used entry if dirty, then discard it.
    ///
    /// A failed write-back propagates with the cache untouched: the victim
    /// stays in place and nothing new is installed.
    fn evict_lru(&mut self) -> Result<()> {
        if let Some(victim) = self.entries.back() {
            if victim.dirty {
                self.store.set(&victim.key, &victim.value)?;
                self.stats.store_writes += 1;
            }
            log::trace!("lru: evicting {:?}", victim.key);
        }
        self.entries.pop_back();
        self.stats.evictions += 1;
        Ok(())
    }
}

impl<S: BackingStore> Cache for LruCache<S> {
    fn get(&mut self, key: &str) -> Result<String> {
        if self.capacity == 0 {
            self.stats.misses += 1;
            let value = self.store.get(key)?;
            self.stats.store_reads += 1;
            return Ok(value);
        }

        // Order-independent scan; only the hit reorders.
        if let Some(idx) = self.entries.iter().position(|e| e.key == key) {
            self.stats.hits += 1;
            let value = self.entries[idx].value.clone();
            self.promote(idx);
            return Ok(value);
        }

        self.stats.misses += 1;
        let value = self.store.get(key)?;
        self.stats.store_reads += 1;

        // Fetched unmodified from the store: insert clean.
        self.insert_mru(key, &value, false)?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.capacity == 0 {
            self.stats.misses += 1;
            self.store.set(key, value)?;
            self.stats.store_writes += 1;
            return Ok(());
        }

        if let Some(idx) = self.entries.iter().position(|e| e.key == key) {
            self.stats.hits += 1;
            let entry = &mut self.entries[idx];
            entry.value = value.to_string();
            entry.dirty = true;
            self.promote(idx);
            return Ok(());
        }

        self.stats.misses += 1;
        self.insert_mru(key, value, true)
    }

    fn flush(&mut self) -> Result<()> {
        let mut written = 0u64;
        for entry in self.entries.iter_mut() {
            if entry.dirty {
                self.store.set(&entry.key, &entry.value)?;
                self.stats.store_writes += 1;
                entry.dirty = false;
                written += 1;
            }
        }
        log::debug!("lru: flushed {} dirty entries", written);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }
}
