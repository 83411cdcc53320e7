//! Symbol-overlap similarity between snippets

use crate::symbols::{extract_symbols, SymbolSet};

/// Jaccard similarity of two symbol sets: `|a ∩ b| / |a ∪ b|`.
///
/// Two empty sets share nothing, so the result is `0.0` rather than NaN.
pub fn symbol_set_similarity(a: &SymbolSet, b: &SymbolSet) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|symbol| large.contains(*symbol)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Jaccard similarity of the symbols of two snippets.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    symbol_set_similarity(&extract_symbols(a), &extract_symbols(b))
}
