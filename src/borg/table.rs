//! # Shared Table
//!
//! The one attribute table every Borg handle reads and writes.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Process-wide storage behind every handle. Created on first access.
static SHARED_TABLE: LazyLock<SharedTable> = LazyLock::new(SharedTable::default);

/// A mutable name → text table shared by reference.
///
/// Handles hold a `&'static SharedTable` and never a copy, so a write through one
/// handle is what every other handle reads next.
#[derive(Debug, Default)]
pub struct SharedTable {
    attributes: Mutex<HashMap<String, String>>,
}

impl SharedTable {
    /// The process-wide table.
    pub fn global() -> &'static SharedTable {
        &SHARED_TABLE
    }

    /// Reads an attribute.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = self.lock().get(name).cloned();
        trace!(name, ?value, "Read attribute");
        value
    }

    /// Writes an attribute, replacing any previous value.
    pub fn set(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        trace!(name, %value, "Write attribute");
        self.lock().insert(name.to_string(), value);
    }

    /// Names of every attribute currently set, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    // A panic while holding the lock cannot leave a half-written String behind,
    // so a poisoned table is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.attributes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
