//! swapcache - a bounded write-back key-value cache with swappable eviction
//! policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Caller                             │
//! │              get(key) · set(key, value) · flush()           │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │           Cache facade (cache/)  [Runtime Swappable]        │
//! │   ┌─────────────────────────────────────────────────────┐   │
//! │   │      Eviction Policies:  LRU | CLOCK | FIFO         │   │
//! │   │         (substitutable behind one contract)         │   │
//! │   └─────────────────────────────────────────────────────┘   │
//! │        Entry + dirty tracking + CacheStats + SharedCache    │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                ↓ miss fetch / write-back
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Backing store (storage/)                    │
//! │        BackingStore trait · FileStore · MemoryStore         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each engine keeps a fixed-capacity set of key/value entries, tracks
//! which ones were modified since last persisted (dirty), and writes a
//! dirty victim back to the store before evicting it. Eviction is
//! all-or-nothing: a failed write-back leaves the cache exactly as it was.
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`cache`] - The eviction engines and the facade contract
//! - [`storage`] - The backing-store contract and its implementations
//!
//! # Quick Start
//! ```
//! use swapcache::{Cache, MemoryStore, Policy};
//!
//! let mut store = MemoryStore::new();
//! store.insert("a", "1");
//!
//! let mut cache = Policy::Lru.build(store, 2);
//! assert_eq!(cache.get("a").unwrap(), "1"); // fetched from the store
//! cache.set("b", "2").unwrap();             // dirty until flushed
//! cache.flush().unwrap();
//! ```

pub mod cache;
pub mod common;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_CAPACITY;
pub use common::{Error, Result};

pub use cache::{Cache, CacheStats, ClockCache, Entry, FifoCache, LruCache, Policy, SharedCache};
pub use storage::{BackingStore, FileStore, MemoryStore};
