//! Thread-safe store handle
//!
//! One mutex guards the mapping and the log handle together, so a record
//! and its in-memory effect are always applied as one step.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::store::Store;

/// Cloneable handle to a [`Store`] shared between threads
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.inner.lock().set(key, value)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        self.inner.lock().get(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with the lock held
    pub fn with_store<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        let guard = self.inner.lock();
        f(&*guard)
    }

    /// Take the store back once this is the last handle
    pub fn into_inner(self) -> std::result::Result<Store, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
