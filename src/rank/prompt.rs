//! Token-budgeted snippet selection.

use crate::domain::RankedSnippet;
use crate::utils::estimate_tokens;

/// Keep snippets, in order, while they fit in `max_tokens`.
///
/// A snippet too large for the remaining budget is skipped; smaller ones
/// after it may still fit.
pub fn fill_prompt_with_snippets(
    snippets: Vec<RankedSnippet>,
    max_tokens: usize,
) -> Vec<RankedSnippet> {
    let mut remaining = max_tokens;
    let mut kept = Vec::new();

    for snippet in snippets {
        let tokens = estimate_tokens(&snippet.contents);
        if tokens <= remaining {
            remaining -= tokens;
            kept.push(snippet);
        } else {
            tracing::debug!(path = %snippet.path, tokens, remaining, "snippet over budget");
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineRange;

    fn snippet(path: &str, chars: usize) -> RankedSnippet {
        RankedSnippet::new(path, LineRange::new(0, 0), "x".repeat(chars))
    }

    #[test]
    fn test_keeps_everything_within_budget() {
        let out = fill_prompt_with_snippets(vec![snippet("a", 8), snippet("b", 8)], 4);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_skips_oversized_snippet_and_continues() {
        // 2 tokens, 10 tokens, 1 token against a budget of 4
        let snippets = vec![snippet("a", 8), snippet("b", 40), snippet("c", 4)];
        let out = fill_prompt_with_snippets(snippets, 4);
        let paths: Vec<&str> = out.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "c"]);
    }

    #[test]
    fn test_never_exceeds_budget() {
        let snippets: Vec<_> = (1..20).map(|n| snippet(&n.to_string(), n * 7)).collect();
        let out = fill_prompt_with_snippets(snippets, 50);
        let used: usize = out.iter().map(|s| estimate_tokens(&s.contents)).sum();
        assert!(used <= 50);
    }

    #[test]
    fn test_zero_budget_keeps_only_empty_snippets() {
        let out = fill_prompt_with_snippets(vec![snippet("a", 0), snippet("b", 1)], 0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "a");
    }
}
