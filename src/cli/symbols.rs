//! Symbols command implementation

use anyhow::Result;
use clap::Args;
use snippet_symbols::extract_symbols;
use std::path::PathBuf;

use super::utils::read_input;

#[derive(Args)]
pub struct SymbolsArgs {
    /// Snippet file to read (stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print symbols as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SymbolsArgs) -> Result<()> {
    let snippet = read_input(args.file.as_deref())?;

    let mut symbols: Vec<String> = extract_symbols(&snippet).into_iter().collect();
    symbols.sort();
    tracing::debug!(symbols = symbols.len(), chars = snippet.chars().count(), "extracted symbols");

    if args.json {
        println!("{}", serde_json::to_string(&symbols)?);
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
    }

    Ok(())
}
