//! # Abstract Factory: the Pet Shop
//!
//! The abstract factory pattern gives a client an interface for creating related
//! objects without naming their concrete types. The client decides *when* to create,
//! the factory decides *what*.
//!
//! ## The Recipe
//!
//! In Rust the "interface" is a single-method trait, [`AnimalCreator`]. A blanket
//! impl makes every `Fn() -> Box<dyn Animal>` a creator, so most callers never write
//! an impl at all:
//!
//! ```rust
//! use pattern_recipe::abstract_factory::{Animal, Dog, PetShop};
//!
//! let shop = PetShop::new(|| -> Box<dyn Animal> { Box::new(Dog) });
//! shop.show_pet(&mut std::io::sink()).unwrap();
//! ```
//!
//! A [`Species`] value is also a creator, the same way a class object is "callable"
//! in dynamic languages. [`RandomAnimal`] shows that a creator can hide arbitrary
//! selection logic, even non-determinism, behind the same one-method contract.
//!
//! ## Structure
//!
//! - [`animal`] - the [`Animal`] capability trait and the [`Dog`] / [`Cat`] variants
//! - [`creator`] - [`AnimalCreator`] and [`RandomAnimal`]
//! - [`shop`] - the [`PetShop`] client
//! - [`error`] - [`ShopError`]
//! - [`run_demo`] - the scripted walkthrough printed by the `abstract_factory` binary
//!
//! ## Trade-offs
//!
//! - **Trait object vs generic**: `PetShop` stores a `Box<dyn AnimalCreator>` so that
//!   shops with different creators share one type. A `PetShop<C: AnimalCreator>` would
//!   avoid the allocation but every shop would be a different type.
//! - **Absent creator**: `PetShop::default()` has no creator. Showing a pet from it is
//!   a caller bug and returns [`ShopError::MissingCreator`] instead of guessing.

pub mod animal;
pub mod creator;
pub mod error;
pub mod shop;

pub use animal::*;
pub use creator::*;
pub use error::*;
pub use shop::*;

use std::io::Write;
use tracing::info;

/// Width of the separator printed between random pets.
const SEPARATOR_WIDTH: usize = 20;

/// How many pets the random shop shows in the demo.
const RANDOM_SHOWINGS: usize = 3;

/// Runs the scripted pet shop walkthrough.
///
/// A cat-only shop shows one pet, then a random shop shows three, each followed
/// by a separator line.
pub fn run_demo<W: Write>(out: &mut W) -> Result<(), ShopError> {
    info!("Abstract factory demo started");

    // A shop that only sells cats
    let cat_shop = PetShop::new(Species::Cat);
    cat_shop.show_pet(out)?;
    writeln!(out)?;

    // A shop that sells random animals
    let shop = PetShop::new(RandomAnimal::default());
    for _ in 0..RANDOM_SHOWINGS {
        shop.show_pet(out)?;
        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
    }

    info!("Abstract factory demo finished");
    Ok(())
}
