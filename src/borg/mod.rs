//! # Borg: Shared State Without Shared Identity
//!
//! The Borg (or monostate) pattern is a relative of the singleton. Instead of
//! allowing only one instance, it allows as many instances as you like and makes
//! them all share the same state. Identity is not shared, state is.
//!
//! ## The Recipe
//!
//! Rust has no per-object attribute dictionary to swap out, so the shared storage
//! is explicit:
//!
//! 1. One process-wide [`SharedTable`] lives in a lazily initialized `static`.
//! 2. A handle ([`Borg`], [`YourBorg`]) holds nothing but a `&'static` reference to it.
//! 3. The [`SharedState`] trait forwards every read and write to that table.
//!
//! "Subclassing" is composition: [`YourBorg`] wraps a [`Borg`] and returns the base's
//! table, so there is exactly one table for the whole family.
//!
//! ## Walkthrough
//!
//! ```rust
//! use pattern_recipe::borg::{Borg, SharedState, YourBorg};
//!
//! let rm1 = Borg::new();
//! let rm2 = Borg::new();
//!
//! rm1.set_state("Idle");
//! rm2.set_state("Running");
//! assert_eq!(format!("rm1: {rm1}"), "rm1: Running");
//! assert_eq!(format!("rm2: {rm2}"), "rm2: Running");
//!
//! // Modifying state through rm2 changes what rm1 sees too
//! rm2.set_state("Zombie");
//! assert_eq!(format!("rm1: {rm1}"), "rm1: Zombie");
//! assert_eq!(format!("rm2: {rm2}"), "rm2: Zombie");
//!
//! // Shared attributes, distinct objects
//! assert!(!std::ptr::eq(&rm1, &rm2));
//!
//! // A derived handle shares the table, and building it resets the state
//! let rm3 = YourBorg::new();
//! assert_eq!(format!("rm1: {rm1}"), "rm1: Init");
//! assert_eq!(format!("rm2: {rm2}"), "rm2: Init");
//! assert_eq!(format!("rm3: {rm3}"), "rm3: Init");
//! ```
//!
//! ## Where it is useful
//!
//! Anything that must look like "many objects, one configuration": a database
//! connection helper that every component constructs for itself, for example.
//!
//! ## Concurrency
//!
//! A `static` must be `Sync`, so the table sits behind a `Mutex`. Each read and each
//! write is atomic on its own. Sequences of accesses from several threads can still
//! interleave; the demo is single-threaded and does not need more than that.

pub mod handle;
pub mod table;

pub use handle::*;
pub use table::*;

use std::io::{self, Write};
use tracing::info;

/// Runs the scripted Borg walkthrough and writes its transcript to `out`.
pub fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    info!("Borg demo started");

    let rm1 = Borg::new();
    let rm2 = Borg::new();

    rm1.set_state("Idle");
    rm2.set_state("Running");

    writeln!(out, "rm1: {rm1}")?;
    writeln!(out, "rm2: {rm2}")?;

    rm2.set_state("Zombie");

    writeln!(out, "rm1: {rm1}")?;
    writeln!(out, "rm2: {rm2}")?;

    writeln!(out, "rm1 is rm2: {}", std::ptr::eq(&rm1, &rm2))?;

    let rm3 = YourBorg::new();

    writeln!(out, "rm1: {rm1}")?;
    writeln!(out, "rm2: {rm2}")?;
    writeln!(out, "rm3: {rm3}")?;

    info!(state = %rm3.state(), "Borg demo finished");
    Ok(())
}

/// Serializes unit tests that touch the process-wide table.
#[cfg(test)]
pub(crate) static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
