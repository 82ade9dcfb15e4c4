//! Cache engines and the facade contract.
//!
//! The cache layer sits between a caller and a slower [`BackingStore`],
//! holding a bounded set of entries and writing modified ones back when
//! they are evicted or flushed.
//!
//! # Components
//! - [`Cache`] - the uniform get/set/flush contract every engine implements
//! - [`LruCache`] / [`ClockCache`] / [`FifoCache`] - the eviction engines
//! - [`Policy`] - runtime policy selection
//! - [`SharedCache`] - whole-call mutual exclusion for shared instances
//! - [`CacheStats`] - per-engine counters
//! - [`Entry`] - the unit of cached state

mod clock;
mod entry;
mod fifo;
mod lru;
mod shared;
mod stats;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::ClockCache;
pub use entry::Entry;
pub use fifo::FifoCache;
pub use lru::LruCache;
pub use shared::SharedCache;
pub use stats::CacheStats;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};
use crate::storage::BackingStore;

/// The uniform operation set of a cache engine.
///
/// All three policies implement the same contract, so a caller can
/// substitute one for another (or hold a `Box<dyn Cache>`) without changing
/// call sites.
///
/// # Semantics
/// - `get` consults the cache first and falls back to the backing store on
///   a miss; a store-fetched value is inserted clean.
/// - `set` installs or updates the entry in the cache and marks it dirty;
///   the store only sees it on eviction or flush (write-back).
/// - Eviction is all-or-nothing: if writing the victim back fails, the
///   operation aborts and the cache's visible state is untouched.
/// - `flush` writes every dirty entry back without evicting. It may stop
///   partway on error; re-invoke to make further progress.
/// - Dropping a cache never flushes. Durability on teardown is the
///   caller's responsibility.
pub trait Cache {
    /// Read the value for `key`, from the cache or the backing store.
    fn get(&mut self, key: &str) -> Result<String>;

    /// Write `value` under `key` into the cache, marking it dirty.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Write every dirty entry back to the backing store.
    fn flush(&mut self) -> Result<()>;

    /// Maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Check whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of the engine's counters.
    fn stats(&self) -> CacheStats;
}

impl<C: Cache + ?Sized> Cache for Box<C> {
    fn get(&mut self, key: &str) -> Result<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn stats(&self) -> CacheStats {
        (**self).stats()
    }
}

/// Replacement policy selector.
///
/// # Example
/// ```
/// use swapcache::{Cache, MemoryStore, Policy};
///
/// let policy: Policy = "clock".parse().unwrap();
/// let mut cache = policy.build(MemoryStore::new(), 8);
/// cache.set("a", "1").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Least-recently-used replacement.
    Lru,
    /// Clock (second-chance) replacement.
    Clock,
    /// First-in-first-out replacement.
    Fifo,
}

impl Policy {
    /// All policies, for callers that iterate over them.
    pub const ALL: [Policy; 3] = [Policy::Lru, Policy::Clock, Policy::Fifo];

    /// The policy's canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Lru => "lru",
            Policy::Clock => "clock",
            Policy::Fifo => "fifo",
        }
    }

    /// Build a boxed engine for this policy.
    pub fn build<S>(self, store: S, capacity: usize) -> Box<dyn Cache>
    where
        S: BackingStore + 'static,
    {
        match self {
            Policy::Lru => Box::new(LruCache::new(store, capacity)),
            Policy::Clock => Box::new(ClockCache::new(store, capacity)),
            Policy::Fifo => Box::new(FifoCache::new(store, capacity)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Policy::ALL
            .into_iter()
            .find(|p| name.eq_ignore_ascii_case(p.name()))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
