//! Clock (second-chance) cache engine.

use crate::cache::{Cache, CacheStats, Entry};
use crate::common::Result;
use crate::storage::BackingStore;

/// A slot in the clock's circular array.
#[derive(Debug)]
struct ClockSlot {
    entry: Entry,

    /// Set when the entry is accessed, cleared as the hand sweeps past.
    referenced: bool,
}

/// A write-back cache with clock (second-chance) replacement.
///
/// Entries sit in a fixed circular array and are never reordered; a hit
/// only sets the slot's reference bit. When the cache is full, the clock
/// hand sweeps the array: a referenced slot loses its bit and gets a second
/// chance, the first unreferenced slot becomes the victim. The sweep
/// terminates within two passes because every visited slot either becomes
/// the victim or has its bit cleared.
///
/// `flush` also resets every reference bit, forgetting all recency. That is
/// a deliberate simplification of the policy, not a bug.
///
/// # Example
/// ```
/// use swapcache::{Cache, ClockCache, MemoryStore};
///
/// let mut cache = ClockCache::new(MemoryStore::new(), 2);
/// cache.set("a", "1").unwrap();
/// assert_eq!(cache.get("a").unwrap(), "1");
/// ```
pub struct ClockCache<S> {
    /// The persistent layer this cache fronts.
    store: S,

    /// Maximum number of entries, immutable for the instance's lifetime.
    capacity: usize,

    /// Circular array, grows up to `capacity` and then stays full.
    slots: Vec<ClockSlot>,

    /// The clock hand: index of the next eviction candidate.
    cursor: usize,

    stats: CacheStats,
}

impl<S: BackingStore> ClockCache<S> {
    /// Create a cache fronting `store`, holding at most `capacity` entries.
    ///
    /// Capacity 0 is a pass-through: every operation forwards straight to
    /// the store.
    pub fn new(store: S, capacity: usize) -> Self {
        Self {
            store,
            capacity,
            slots: Vec::with_capacity(capacity),
            cursor: 0,
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

    /// Place a new entry, evicting via the second-chance sweep if full.
    ///
    /// Shared by the `get`-miss and `set`-miss paths; only the dirty flag
    /// of the new entry differs between them.
    ///
    /// On a write-back failure the hand stays parked on the victim and
    /// nothing is installed; reference bits already cleared earlier in the
    /// sweep stay cleared.
    fn install(&mut self, key: &str, value: &str, dirty: bool) -> Result<()> {
        if self.slots.len() < self.capacity {
            self.slots.push(ClockSlot {
                entry: Entry::new(key, value, dirty),
                referenced: true,
            });
            return Ok(());
        }

        loop {
            if self.slots[self.cursor].referenced {
                // Second chance: clear the bit and move on.
                self.slots[self.cursor].referenced = false;
                self.cursor = (self.cursor + 1) % self.capacity;
                continue;
            }

            let victim = &self.slots[self.cursor].entry;
            if victim.dirty {
                self.store.set(&victim.key, &victim.value)?;
                self.stats.store_writes += 1;
            }
            log::trace!("clock: evicting {:?} from slot {}", victim.key, self.cursor);

            self.slots[self.cursor] = ClockSlot {
                entry: Entry::new(key, value, dirty),
                referenced: true,
            };
            self.cursor = (self.cursor + 1) % self.capacity;
            self.stats.evictions += 1;
            return Ok(());
        }
    }
}

impl<S: BackingStore> Cache for ClockCache<S> {
    fn get(&mut self, key: &str) -> Result<String> {
        if self.capacity == 0 {
            self.stats.misses += 1;
            let value = self.store.get(key)?;
            self.stats.store_reads += 1;
            return Ok(value);
        }

        if let Some(slot) = self.slots.iter_mut().find(|s| s.entry.key == key) {
            // The reference bit is the only bookkeeping on a hit.
            slot.referenced = true;
            let value = slot.entry.value.clone();
            self.stats.hits += 1;
            return Ok(value);
        }

        self.stats.misses += 1;
        let value = self.store.get(key)?;
        self.stats.store_reads += 1;

        // Fetched unmodified from the store: insert clean.
        self.install(key, &value, false)?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.capacity == 0 {
            self.stats.misses += 1;
            self.store.set(key, value)?;
            self.stats.store_writes += 1;
            return Ok(());
        }

        if let Some(slot) = self.slots.iter_mut().find(|s| s.entry.key == key) {
            slot.entry.value = value.to_string();
            slot.entry.dirty = true;
            slot.referenced = true;
            self.stats.hits += 1;
            return Ok(());
        }

        self.stats.misses += 1;
        self.install(key, value, true)
    }

    fn flush(&mut self) -> Result<()> {
        let mut written = 0u64;
        for slot in self.slots.iter_mut() {
            if slot.entry.dirty {
                self.store.set(&slot.entry.key, &slot.entry.value)?;
                self.stats.store_writes += 1;
                slot.entry.dirty = false;
                written += 1;
            }
            // Flush also resets the clock's notion of recency.
            slot.referenced = false;
        }
        log::debug!("clock: flushed {} dirty entries", written);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }
}
