//! Prints the Borg walkthrough transcript.

use pattern_recipe::borg;
use pattern_recipe::tracing::setup_tracing;

fn main() -> std::io::Result<()> {
    setup_tracing();

    let stdout = std::io::stdout();
    borg::run_demo(&mut stdout.lock())
}
