//! Snippet ranking by symbol overlap with the text around the cursor

use crate::domain::{RankedSnippet, RankingConfig};
use crate::similarity::symbol_set_similarity;
use crate::symbols::extract_symbols;
use rayon::prelude::*;

pub mod dedup;
pub mod prompt;

pub use dedup::deduplicate_snippets;
pub use prompt::fill_prompt_with_snippets;

/// Text around the cursor used as the ranking query.
///
/// Takes the last `floor(size * pct)` characters of `prefix` and fills the
/// rest of the window from the start of `suffix`.
pub fn window_around_cursor(prefix: &str, suffix: &str, config: &RankingConfig) -> String {
    let size = config.sliding_window_size;
    let pct = config.sliding_window_prefix_percentage.clamp(0.0, 1.0);
    let prefix_chars = ((size as f64 * pct).floor() as usize).min(size);
    let suffix_chars = size - prefix_chars;
    format!("{}{}", tail_chars(prefix, prefix_chars), head_chars(suffix, suffix_chars))
}

/// Score, merge and order candidate snippets, best first.
///
/// Snippets without a score get the Jaccard similarity between their
/// contents and the cursor window. Overlapping snippets from the same file
/// are merged before ordering.
pub fn rank_and_order_snippets(
    mut snippets: Vec<RankedSnippet>,
    prefix: &str,
    suffix: &str,
    config: &RankingConfig,
) -> Vec<RankedSnippet> {
    let window = window_around_cursor(prefix, suffix, config);
    let window_symbols = extract_symbols(&window);

    snippets.par_iter_mut().filter(|snippet| snippet.score.is_none()).for_each(|snippet| {
        let symbols = extract_symbols(&snippet.contents);
        snippet.score = Some(symbol_set_similarity(&symbols, &window_symbols));
    });

    let candidates = snippets.len();
    let mut ranked: Vec<RankedSnippet> = deduplicate_snippets(snippets)
        .into_iter()
        .filter(|snippet| snippet.score_or_zero() >= config.min_score)
        .collect();

    ranked.sort_by(|a, b| {
        b.score_or_zero()
            .total_cmp(&a.score_or_zero())
            .then_with(|| a.path.cmp(&b.path))
            .then_with(|| a.range.start_line.cmp(&b.range.start_line))
    });

    tracing::debug!(
        candidates,
        ranked = ranked.len(),
        window_symbols = window_symbols.len(),
        "ranked snippets"
    );
    ranked
}

fn tail_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().nth_back(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

fn head_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
