//! FIFO (First-In-First-Out) cache engine.

use crate::cache::{Cache, CacheStats, Entry};
use crate::common::Result;
use crate::storage::BackingStore;

/// A write-back cache that evicts in pure insertion order.
///
/// Entries sit in a fixed circular array with explicit head/tail indices.
/// There is no recency or reference tracking of any kind: a `get` hit
/// returns the value and changes nothing, which is the key semantic
/// difference from LRU. Re-reading a key does not save it from eviction.
///
/// Capacity 0 is a deliberate pass-through mode, not an error: every
/// `get`/`set` forwards directly to the backing store.
///
/// # Example
/// ```
/// use swapcache::{Cache, FifoCache, MemoryStore};
///
/// let mut cache = FifoCache::new(MemoryStore::new(), 2);
/// cache.set("a", "1").unwrap();
/// assert_eq!(cache.get("a").unwrap(), "1");
/// ```
pub struct FifoCache<S> {
    /// The persistent layer this cache fronts.
    store: S,

    /// Maximum number of entries, immutable for the instance's lifetime.
    capacity: usize,

    /// Circular array; `None` marks a never-used slot.
    slots: Vec<Option<Entry>>,

    /// Index of the oldest surviving entry.
    head: usize,

    /// Index of the next insertion slot.
    tail: usize,

    stats: CacheStats,
}

impl<S: BackingStore> FifoCache<S> {
    /// Create a cache fronting `store`, holding at most `capacity` entries.
    pub fn new(store: S, capacity: usize) -> Self {
        Self {
            store,
            capacity,
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            tail: 0,
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

    /// Displace whatever occupies the tail slot and install a new entry.
    ///
    /// Shared by the `set`-miss and `get`-fetch paths; only the dirty flag
    /// of the new entry differs between them. A dirty occupant is written
    /// back first; a failed write-back propagates with the slot and cache
    /// unchanged.
    fn push_tail(&mut self, key: &str, value: &str, dirty: bool) -> Result<()> {
        if let Some(old) = &self.slots[self.tail] {
            if old.dirty {
                self.store.set(&old.key, &old.value)?;
                self.stats.store_writes += 1;
            }
            log::trace!("fifo: displacing {:?} from slot {}", old.key, self.tail);
            self.stats.evictions += 1;
        }

        self.slots[self.tail] = Some(Entry::new(key, value, dirty));
        self.tail = (self.tail + 1) % self.capacity;
        if self.tail == self.head {
            // The oldest surviving entry was displaced.
            self.head = (self.head + 1) % self.capacity;
        }
        Ok(())
    }
}

impl<S: BackingStore> Cache for FifoCache<S> {
    fn get(&mut self, key: &str) -> Result<String> {
        if self.capacity == 0 {
            self.stats.misses += 1;
            let value = self.store.get(key)?;
            self.stats.store_reads += 1;
            return Ok(value);
        }

        // Hit: return the value verbatim. No promotion, no bookkeeping.
        if let Some(entry) = self.slots.iter().flatten().find(|e| e.key == key) {
            let value = entry.value.clone();
            self.stats.hits += 1;
            return Ok(value);
        }

        self.stats.misses += 1;
        let value = self.store.get(key)?;
        self.stats.store_reads += 1;

        // Fetched unmodified from the store: insert clean.
        self.push_tail(key, &value, false)?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.capacity == 0 {
            self.stats.misses += 1;
            self.store.set(key, value)?;
            self.stats.store_writes += 1;
            return Ok(());
        }

        if let Some(entry) = self.slots.iter_mut().flatten().find(|e| e.key == key) {
            // Update in place; insertion order is untouched.
            entry.value = value.to_string();
            entry.dirty = true;
            self.stats.hits += 1;
            return Ok(());
        }

        self.stats.misses += 1;
        self.push_tail(key, value, true)
    }

    fn flush(&mut self) -> Result<()> {
        let mut written = 0u64;
        // Never-used slots are skipped; they are never dirty.
        for entry in self.slots.iter_mut().flatten() {
            if entry.dirty {
                self.store.set(&entry.key, &entry.value)?;
                self.stats.store_writes += 1;
                entry.dirty = false;
                written += 1;
            }
        }
        log::debug!("fifo: flushed {} dirty entries", written);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }
}
