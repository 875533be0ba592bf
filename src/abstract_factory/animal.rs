//! # Animals
//!
//! The product family of the pet shop. Every animal can say something and can
//! print its own name; nothing else is required of a variant.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// The capability set every pet exposes.
///
/// The display name comes from [`Display`], the sound from [`Animal::speak`].
/// Animals are immutable: a shop creates one per display call and drops it afterwards.
pub trait Animal: Display + Debug {
    /// The sound this animal makes.
    fn speak(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dog;

impl Animal for Dog {
    fn speak(&self) -> &'static str {
        "woof"
    }
}

impl Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dog")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> &'static str {
        "meow"
    }
}

impl Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cat")
    }
}

/// The built-in animal variants.
///
/// A `Species` is itself a creator (see
/// [`impl AnimalCreator for Species`](super::AnimalCreator)), so a shop can be
/// configured with `Species::Cat` the same way it can be configured with a closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Every built-in variant, in declaration order.
    pub const ALL: [Species; 2] = [Species::Dog, Species::Cat];

    /// Builds a fresh animal of this species.
    pub fn spawn(self) -> Box<dyn Animal> {
        match self {
            Species::Dog => Box::new(Dog),
            Species::Cat => Box::new(Cat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_species_speaks_its_own_sound() {
        let dog = Species::Dog.spawn();
        assert_eq!(dog.to_string(), "Dog");
        assert_eq!(dog.speak(), "woof");

        let cat = Species::Cat.spawn();
        assert_eq!(cat.to_string(), "Cat");
        assert_eq!(cat.speak(), "meow");
    }

    #[test]
    fn test_all_lists_every_species_once() {
        assert_eq!(Species::ALL.len(), 2);
        assert_ne!(Species::ALL[0], Species::ALL[1]);
    }

    #[test]
    fn test_species_derives_plain_serde() {
        fn assert_serde<T: Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<Species>();
    }
}
