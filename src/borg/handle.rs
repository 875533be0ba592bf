//! # Borg Handles
//!
//! [`Borg`] and [`YourBorg`] are separate objects with no storage of their own.
//! Every attribute access is forwarded to the [`SharedTable`].

use super::table::SharedTable;
use std::fmt::{self, Display};
use tracing::debug;

/// Name of the field every handle exposes through [`SharedState::state`].
pub const STATE_FIELD: &str = "state";

/// Value written to [`STATE_FIELD`] whenever a handle is constructed.
pub const INITIAL_STATE: &str = "Init";

/// Attribute access forwarded to a shared table.
///
/// Implementors only say *which* table they are bound to; reads and writes are
/// provided. All methods take `&self`: a write through any handle is a write to
/// the table, not to the handle.
pub trait SharedState {
    /// The table this handle is bound to.
    fn table(&self) -> &'static SharedTable;

    /// Current value of the shared `state` field.
    fn state(&self) -> String {
        self.table().get(STATE_FIELD).unwrap_or_default()
    }

    /// Sets the shared `state` field for every handle.
    fn set_state(&self, value: &str) {
        self.table().set(STATE_FIELD, value);
    }

    /// Reads any shared attribute.
    fn attribute(&self, name: &str) -> Option<String> {
        self.table().get(name)
    }

    /// Writes any shared attribute.
    fn set_attribute(&self, name: &str, value: &str) {
        self.table().set(name, value);
    }

    /// Whether `other` reads and writes the same table as `self`.
    fn shares_state_with(&self, other: &dyn SharedState) -> bool {
        std::ptr::eq(self.table(), other.table())
    }
}

/// The base shared-state handle.
///
/// # Construction resets the state
/// [`Borg::new`] writes [`INITIAL_STATE`] to the shared `state` field. Building a
/// new handle therefore resets the state seen by every existing handle, including
/// values other handles wrote a moment ago. This is surprising, and it is kept
/// on purpose: it is the observable behavior of the classic example.
///
/// ```rust
/// use pattern_recipe::borg::{Borg, SharedState};
///
/// let first = Borg::new();
/// first.set_state("Running");
///
/// let _second = Borg::new();
/// assert_eq!(first.state(), "Init");
/// ```
#[derive(Debug)]
pub struct Borg {
    table: &'static SharedTable,
}

impl Borg {
    /// Binds a new handle to the process-wide table and resets `state`.
    pub fn new() -> Self {
        let table = SharedTable::global();
        table.set(STATE_FIELD, INITIAL_STATE);
        debug!(state = INITIAL_STATE, "Borg bound to shared table");
        Self { table }
    }
}

impl Default for Borg {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState for Borg {
    fn table(&self) -> &'static SharedTable {
        self.table
    }
}

impl Display for Borg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state())
    }
}

/// A handle type derived from [`Borg`] that adds no behavior.
///
/// It is built on top of a `Borg`, so it binds to the same table and resets the
/// state on construction just like the base type. There is no per-type table.
#[derive(Debug, Default)]
pub struct YourBorg {
    base: Borg,
}

impl YourBorg {
    /// Binds a new handle to the same table as [`Borg`] and resets `state`.
    ///
    /// Like [`Borg::new`], this overwrites whatever state other handles had set.
    pub fn new() -> Self {
        Self { base: Borg::new() }
    }
}

impl SharedState for YourBorg {
    fn table(&self) -> &'static SharedTable {
        self.base.table()
    }
}

impl Display for YourBorg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.base, f)
    }
}
