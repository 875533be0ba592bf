//! Error types for the pet shop.

use thiserror::Error;

/// Errors that can occur while showing pets.
#[derive(Debug, Error)]
pub enum ShopError {
    /// `show_pet` was called on a shop that was never given a creator.
    ///
    /// This is a caller contract breach, not something the shop recovers from.
    #[error("Pet shop has no animal creator to invoke")]
    MissingCreator,

    /// A [`RandomAnimal`](super::RandomAnimal) needs at least one creator to pick from.
    #[error("Random animal creator has no registered variants")]
    NoVariants,

    /// Writing the pet description failed.
    #[error("Failed to write pet: {0}")]
    Io(#[from] std::io::Error),
}
