//! Token estimation

/// Estimate tokens using a simple heuristic (chars / 4), rounded up so that
/// any non-empty snippet costs at least one token.
///
/// Counts Unicode code points, not bytes; byte length over-counts multi-byte
/// UTF-8 content such as CJK identifiers.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}
