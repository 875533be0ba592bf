//! Prints the pet shop walkthrough.
//!
//! The first pet always comes from a cat-only shop. The next three come from a
//! shop with a random creator, so they change from run to run.

use pattern_recipe::abstract_factory::{self, ShopError};
use pattern_recipe::tracing::setup_tracing;

fn main() -> Result<(), ShopError> {
    setup_tracing();

    let stdout = std::io::stdout();
    abstract_factory::run_demo(&mut stdout.lock())
}
