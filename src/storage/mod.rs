//! Store collaborators and the contract the cache engines consume.
//!
//! Every cache engine talks to its persistent layer through the
//! [`BackingStore`] trait and nothing else. The store owns durability;
//! the cache layer owns nothing but its in-memory entries.
//!
//! # Implementations
//! - [`FileStore`] - one file per key inside a directory, fsync on write
//! - [`MemoryStore`] - HashMap-backed store for tests, doctests and benches

mod file_store;
mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::common::Result;

/// The persistent key-value service a cache fronts.
///
/// # Contract
/// - `get` returns the stored value, or `Error::NotFound` when the key is
///   absent, or an I/O failure.
/// - `set` must be durable by the time it returns `Ok`.
///
/// Calls are synchronous from the cache's point of view; no timeout or
/// cancellation is defined at this layer. A hung store call blocks the
/// cache operation, and that responsibility belongs to the store.
pub trait BackingStore {
    /// Fetch the value stored for `key`.
    fn get(&mut self, key: &str) -> Result<String>;

    /// Durably store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// Lending a store to an engine shouldn't require giving up ownership,
// mirroring the std::io::Read/Write blanket impls.
impl<S: BackingStore + ?Sized> BackingStore for &mut S {
    fn get(&mut self, key: &str) -> Result<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: BackingStore + ?Sized> BackingStore for Box<S> {
    fn get(&mut self, key: &str) -> Result<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
