//! Shared test collaborator: a backing store that records every call.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use swapcache::{BackingStore, Error, Result};

#[derive(Debug, Default)]
struct Inner {
    data: HashMap<String, String>,
    set_log: Vec<(String, String)>,
    gets: usize,
    /// None = sets always succeed; Some(n) = the next n sets succeed,
    /// everything after fails.
    fail_after_sets: Option<usize>,
}

/// A shared-handle store: one clone goes to the cache under test, another
/// stays with the test for inspection and fault injection.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    inner: Rc<RefCell<Inner>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without it counting as store traffic.
    pub fn seed(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .data
            .insert(key.to_string(), value.to_string());
    }

    /// Current stored value for `key`, if any.
    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.borrow().data.get(key).cloned()
    }

    /// A copy of everything the store holds.
    pub fn data(&self) -> HashMap<String, String> {
        self.inner.borrow().data.clone()
    }

    /// Every successful `set` call observed, in order.
    pub fn set_log(&self) -> Vec<(String, String)> {
        self.inner.borrow().set_log.clone()
    }

    /// Number of successful `set` calls for one key.
    pub fn sets_for(&self, key: &str) -> usize {
        self.inner
            .borrow()
            .set_log
            .iter()
            .filter(|(k, _)| k == key)
            .count()
    }

    /// Number of `get` calls observed (successful or not).
    pub fn gets(&self) -> usize {
        self.inner.borrow().gets
    }

    /// Let the next `n` sets succeed, then fail every set after that.
    pub fn fail_sets_after(&self, n: usize) {
        self.inner.borrow_mut().fail_after_sets = Some(n);
    }

    /// Sets succeed again.
    pub fn allow_sets(&self) {
        self.inner.borrow_mut().fail_after_sets = None;
    }

    fn injected() -> Error {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "injected store failure",
        ))
    }
}

impl BackingStore for RecordingStore {
    fn get(&mut self, key: &str) -> Result<String> {
        let mut inner = self.inner.borrow_mut();
        inner.gets += 1;
        inner
            .data
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        match &mut inner.fail_after_sets {
            Some(0) => return Err(Self::injected()),
            Some(n) => *n -= 1,
            None => {}
        }
        inner.set_log.push((key.to_string(), value.to_string()));
        inner.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
