//! In-memory backing store.

use std::collections::HashMap;

use crate::common::{Error, Result};
use crate::storage::BackingStore;

/// A HashMap-backed [`BackingStore`].
///
/// Useful as the cheap collaborator in tests, doctests and benches, and as
/// a reference implementation of the store contract. "Durability" here is
/// just process lifetime.
///
/// # Example
/// ```
/// use swapcache::{BackingStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("a", "1").unwrap();
/// assert_eq!(store.get("a").unwrap(), "1");
/// assert!(store.get("b").is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the store contract.
    ///
    /// Unlike [`BackingStore::set`] this is not an observable store call;
    /// tests use it to set up preexisting state.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// Inspect a value without going through the store contract.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl BackingStore for MemoryStore {
    fn get(&mut self, key: &str) -> Result<String> {
        self.data
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
