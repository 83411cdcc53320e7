//! Command-line interface for snippet-symbols
//!
//! Provides `symbols`, `similarity` and `rank` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod rank;
mod similarity;
mod symbols;
mod utils;

/// Extract symbol fingerprints from code and rank context snippets by overlap
#[derive(Parser)]
#[command(name = "snippet-symbols")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the set of symbols in a snippet
    Symbols(symbols::SymbolsArgs),

    /// Print the Jaccard similarity of two snippets
    Similarity(similarity::SimilarityArgs),

    /// Rank candidate snippets against the text around a cursor
    Rank(rank::RankArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Symbols(args) => symbols::run(args),
        Commands::Similarity(args) => similarity::run(args),
        Commands::Rank(args) => rank::run(args),
    }
}
