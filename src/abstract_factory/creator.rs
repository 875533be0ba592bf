//! # Creators
//!
//! A creator is the "abstract factory" handed to a [`PetShop`](super::PetShop):
//! anything that can be invoked with no arguments and returns some [`Animal`].
//!
//! Three kinds of creator ship with the crate:
//!
//! - any `Fn() -> Box<dyn Animal>` (closures and fn items, via the blanket impl),
//! - a [`Species`], which builds that one variant,
//! - [`RandomAnimal`], which picks one of its registered creators per call.
//!
//! The shop never learns which one it was given.

use super::animal::{Animal, Species};
use super::error::ShopError;
use rand::Rng;
use tracing::trace;

/// A zero-argument factory for animals.
pub trait AnimalCreator {
    /// Builds a new animal.
    fn create(&self) -> Box<dyn Animal>;
}

impl<F> AnimalCreator for F
where
    F: Fn() -> Box<dyn Animal>,
{
    fn create(&self) -> Box<dyn Animal> {
        self()
    }
}

impl AnimalCreator for Species {
    fn create(&self) -> Box<dyn Animal> {
        self.spawn()
    }
}

/// A creator that chooses uniformly at random between its registered creators.
///
/// Selection logic lives entirely inside the creator, which is the point of the
/// example: the shop only sees "something I can call".
///
/// ```rust
/// use pattern_recipe::abstract_factory::{AnimalCreator, RandomAnimal};
///
/// let creator = RandomAnimal::default();
/// let pet = creator.create();
/// assert!(["Dog", "Cat"].contains(&pet.to_string().as_str()));
/// ```
pub struct RandomAnimal {
    creators: Vec<Box<dyn AnimalCreator>>,
}

impl RandomAnimal {
    /// Registers the given creators.
    ///
    /// The classic example registers two or more. A single creator is accepted
    /// too: picking uniformly from one variant always returns that variant, which
    /// keeps a one-element registry well defined. An empty registry has nothing to
    /// pick from and is rejected with [`ShopError::NoVariants`].
    pub fn from_creators(creators: Vec<Box<dyn AnimalCreator>>) -> Result<Self, ShopError> {
        if creators.is_empty() {
            return Err(ShopError::NoVariants);
        }
        Ok(Self { creators })
    }

    /// Registers one creator per listed species.
    pub fn from_species(species: impl IntoIterator<Item = Species>) -> Result<Self, ShopError> {
        let creators = species
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn AnimalCreator>)
            .collect();
        Self::from_creators(creators)
    }

    /// Number of registered creators.
    pub fn variant_count(&self) -> usize {
        self.creators.len()
    }
}

impl Default for RandomAnimal {
    /// Dogs and cats, as in the classic example.
    fn default() -> Self {
        Self {
            creators: Species::ALL
                .into_iter()
                .map(|s| Box::new(s) as Box<dyn AnimalCreator>)
                .collect(),
        }
    }
}

impl AnimalCreator for RandomAnimal {
    fn create(&self) -> Box<dyn Animal> {
        // never empty: both constructors guarantee at least one creator
        let index = rand::rng().random_range(0..self.creators.len());
        trace!(index, variants = self.creators.len(), "Random pick");
        self.creators[index].create()
    }
}
