//! snippet-symbols: inspect symbol fingerprints and rank context snippets
//! from the command line.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
