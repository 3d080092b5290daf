//! Keyed storage of customer handles.

use super::record::CustomerHandle;
use std::collections::HashMap;

/// Map from a unique key to a shared customer handle.
///
/// Stored handles alias the caller's record; nothing is copied on insert.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    entries: HashMap<String, CustomerHandle>,
}

impl CustomerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a handle, returning the one previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, handle: CustomerHandle) -> Option<CustomerHandle> {
        self.entries.insert(key.into(), handle)
    }

    /// Handle stored under `key`.
    pub fn get(&self, key: &str) -> Option<&CustomerHandle> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
