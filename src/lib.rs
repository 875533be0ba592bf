//! # Creational Pattern Recipe
//!
//! > **Two classic creational patterns, written the way you would write them in Rust.**
//!
//! Each module is a small, self-contained example with its own runnable binary.
//! The modules do not depend on each other; read them in any order.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Abstract Factory ([`abstract_factory`])
//! A [`PetShop`](abstract_factory::PetShop) is given a *creator* and calls it whenever
//! it shows a pet. It never names `Dog` or `Cat`.
//! - **Role**: Separates *when* objects are created from *which* objects are created.
//! - **Key items**: [`AnimalCreator`](abstract_factory::AnimalCreator),
//!   [`RandomAnimal`](abstract_factory::RandomAnimal).
//!
//! ### 2. Borg ([`borg`])
//! Many handles, one state. Every [`Borg`](borg::Borg) reads and writes the same
//! process-wide table, while remaining a distinct object.
//! - **Role**: Singleton-like shared configuration without a single instance.
//! - **Key items**: [`SharedState`](borg::SharedState), [`SharedTable`](borg::SharedTable).
//!
//! ### 3. Observability ([`tracing`])
//! Structured logging for both demos, controlled by `RUST_LOG`.
//!
//! ## 👩‍💻 Design Notes
//!
//! ### Traits instead of class hierarchies
//! Both patterns are usually explained with inheritance. Here the shared behavior
//! lives in traits: `Animal` and `AnimalCreator` for the factory, `SharedState` for
//! the Borg. "Derived" types are either new trait impls or wrappers around a base.
//!
//! ### Error handling
//! The shop's only real failure, showing a pet without a creator, is a typed
//! [`ShopError`](abstract_factory::ShopError). Nothing in the library panics on
//! caller mistakes.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run --bin abstract_factory
//! cargo run --bin borg
//!
//! # With logs
//! RUST_LOG=debug cargo run --bin borg
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod abstract_factory;
pub mod borg;
pub mod tracing;
