//! snippet-symbols: lexical symbol fingerprints for autocomplete context ranking
//!
//! Snippets are reduced to sets of symbols, scored by symbol overlap with the
//! text around the cursor, and selected under a token budget.

pub mod config;
pub mod domain;
pub mod error;
pub mod rank;
pub mod similarity;
pub mod symbols;
pub mod utils;

pub use domain::{LineRange, RankedSnippet, RankingConfig};
pub use error::ConfigError;
pub use rank::{deduplicate_snippets, fill_prompt_with_snippets, rank_and_order_snippets};
pub use similarity::{jaccard_similarity, symbol_set_similarity};
pub use symbols::{extract_symbols, is_symbol_delimiter, SymbolSet};
