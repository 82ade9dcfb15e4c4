//! Scriptable backing store for the engine unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::common::{Error, Result};
use crate::storage::BackingStore;

#[derive(Debug, Default)]
struct Inner {
    data: HashMap<String, String>,
    set_log: Vec<(String, String)>,
    gets: usize,
    /// None = sets always succeed; Some(n) = the next n sets succeed,
    /// everything after fails.
    fail_after_sets: Option<usize>,
}

/// A shared-handle store that records every call and can be told to fail.
///
/// Cloning yields another handle to the same store, so a test can hand one
/// clone to an engine and keep another for inspection and fault injection
/// while the engine is alive.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedStore {
    inner: Rc<RefCell<Inner>>,
}

impl ScriptedStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed a value without it counting as store traffic.
    pub(crate) fn seed(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .data
            .insert(key.to_string(), value.to_string());
    }

    /// Current stored value for `key`, if any.
    pub(crate) fn value(&self, key: &str) -> Option<String> {
        self.inner.borrow().data.get(key).cloned()
    }

    /// Every successful `set` call observed, in order.
    pub(crate) fn set_log(&self) -> Vec<(String, String)> {
        self.inner.borrow().set_log.clone()
    }

    /// Number of successful `set` calls for one key.
    pub(crate) fn sets_for(&self, key: &str) -> usize {
        self.inner
            .borrow()
            .set_log
            .iter()
            .filter(|(k, _)| k == key)
            .count()
    }

    /// Number of `get` calls observed (successful or not).
    pub(crate) fn gets(&self) -> usize {
        self.inner.borrow().gets
    }

    /// Let the next `n` sets succeed, then fail every set after that.
    pub(crate) fn fail_sets_after(&self, n: usize) {
        self.inner.borrow_mut().fail_after_sets = Some(n);
    }

    /// Sets succeed again.
    pub(crate) fn allow_sets(&self) {
        self.inner.borrow_mut().fail_after_sets = None;
    }

    fn injected() -> Error {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "injected store failure",
        ))
    }
}

impl BackingStore for ScriptedStore {
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
