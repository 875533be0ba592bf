//! # Pet Shop
//!
//! The client half of the abstract factory. A [`PetShop`] owns one creator and
//! calls it every time it shows a pet; it never names a concrete animal type.

use super::creator::AnimalCreator;
use super::error::ShopError;
use std::fmt;
use std::io::Write;
use tracing::{debug, instrument};

/// A pet shop configured with an animal creator.
///
/// # Construction
/// The creator is the shop's only attribute and is fixed once the shop is built.
/// [`PetShop::default`] builds a shop with no creator; the caller has to supply one
/// with [`PetShop::with_creator`] before showing pets, or
/// [`show_pet`](PetShop::show_pet) fails with [`ShopError::MissingCreator`].
///
/// ```rust
/// use pattern_recipe::abstract_factory::{PetShop, Species};
///
/// let shop = PetShop::new(Species::Cat);
/// let mut out = Vec::new();
/// shop.show_pet(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "We have a lovely Cat\nIt says meow\n");
/// ```
#[derive(Default)]
pub struct PetShop {
    creator: Option<Box<dyn AnimalCreator>>,
}

impl PetShop {
    /// Creates a shop that sells whatever `creator` produces.
    pub fn new(creator: impl AnimalCreator + 'static) -> Self {
        Self {
            creator: Some(Box::new(creator)),
        }
    }

    /// Supplies the creator for a shop built without one.
    pub fn with_creator(mut self, creator: impl AnimalCreator + 'static) -> Self {
        self.creator = Some(Box::new(creator));
        self
    }

    /// Whether a creator has been supplied.
    pub fn has_creator(&self) -> bool {
        self.creator.is_some()
    }

    /// Creates a pet with the configured creator and describes it on `out`.
    ///
    /// Writes two lines: the pet's name, then the sound it makes. The pet is
    /// dropped as soon as it has been shown.
    #[instrument(skip_all)]
    pub fn show_pet<W: Write>(&self, out: &mut W) -> Result<(), ShopError> {
        let creator = self.creator.as_ref().ok_or(ShopError::MissingCreator)?;
        let pet = creator.create();
        debug!(%pet, "Created pet");

        writeln!(out, "We have a lovely {pet}")?;
        writeln!(out, "It says {}", pet.speak())?;
        Ok(())
    }
}

impl fmt::Debug for PetShop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PetShop")
            .field("has_creator", &self.has_creator())
            .finish()
    }
}
