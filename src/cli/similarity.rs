//! Similarity command implementation

use anyhow::Result;
use clap::Args;
use snippet_symbols::jaccard_similarity;
use std::path::PathBuf;

use super::utils::read_input;

#[derive(Args)]
pub struct SimilarityArgs {
    /// First snippet file
    #[arg(value_name = "A")]
    pub first: PathBuf,

    /// Second snippet file
    #[arg(value_name = "B")]
    pub second: PathBuf,
}

pub fn run(args: SimilarityArgs) -> Result<()> {
    let first = read_input(Some(args.first.as_path()))?;
    let second = read_input(Some(args.second.as_path()))?;

    println!("{:.3}", jaccard_similarity(&first, &second));
    Ok(())
}
