//! # Observability & Tracing
//!
//! Both demos log through the `tracing` crate. Nothing is printed unless you ask
//! for it with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin abstract_factory   # one line per created pet
//! RUST_LOG=trace cargo run --bin borg               # every shared-table read and write
//! ```
//!
//! Log lines go to stderr, so the demo transcript on stdout stays exactly the same
//! whatever the log level.

/// Initializes the tracing subscriber for the demo binaries.
///
/// Uses an `EnvFilter` read from `RUST_LOG` and the compact formatter without
/// module targets.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Demo started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
