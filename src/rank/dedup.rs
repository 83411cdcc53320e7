//! Merging of overlapping snippets from the same file.

use crate::domain::{LineRange, RankedSnippet};
use std::collections::BTreeMap;

/// Merge snippets whose line ranges overlap or touch within the same file.
///
/// Output is grouped by path (sorted) and ordered by start line within a
/// path. Snippets from different files are never merged.
pub fn deduplicate_snippets(snippets: Vec<RankedSnippet>) -> Vec<RankedSnippet> {
    let mut by_path: BTreeMap<String, Vec<RankedSnippet>> = BTreeMap::new();
    for snippet in snippets {
        by_path.entry(snippet.path.clone()).or_default().push(snippet);
    }

    by_path.into_values().flat_map(merge_snippets_by_range).collect()
}

fn merge_snippets_by_range(mut snippets: Vec<RankedSnippet>) -> Vec<RankedSnippet> {
    snippets.sort_by(|a, b| {
        a.range
            .start_line
            .cmp(&b.range.start_line)
            .then_with(|| b.range.end_line.cmp(&a.range.end_line))
    });

    let mut merged: Vec<RankedSnippet> = Vec::with_capacity(snippets.len());
    for snippet in snippets {
        if let Some(last) = merged.last_mut() {
            if last.range.touches(&snippet.range) {
                if snippet.range.end_line > last.range.end_line {
                    last.contents = merge_overlapping_contents(last, &snippet);
                    last.range = LineRange::new(last.range.start_line, snippet.range.end_line);
                }
                last.score = max_score(last.score, snippet.score);
                continue;
            }
        }
        merged.push(snippet);
    }

    merged
}

fn merge_overlapping_contents(first: &RankedSnippet, second: &RankedSnippet) -> String {
    // Lines of `first` that come before `second` starts.
    let keep = second.range.start_line.saturating_sub(first.range.start_line);
    let first_lines: Vec<&str> = first.contents.split('\n').collect();
    let prefix = first_lines[..keep.min(first_lines.len())].join("\n");
    if prefix.is_empty() {
        second.contents.clone()
    } else {
        format!("{}\n{}", prefix, second.contents)
    }
}

fn max_score(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(path: &str, start: usize, end: usize, contents: &str, score: f64) -> RankedSnippet {
        RankedSnippet::new(path, LineRange::new(start, end), contents).with_score(score)
    }

    #[test]
    fn test_disjoint_snippets_are_kept() {
        let out = deduplicate_snippets(vec![
            snippet("a.rs", 10, 12, "x\ny\nz", 0.2),
            snippet("a.rs", 0, 2, "a\nb\nc", 0.1),
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].range.start_line, 0);
        assert_eq!(out[1].range.start_line, 10);
    }

    #[test]
    fn test_overlapping_snippets_merge_and_keep_best_score() {
        let out = deduplicate_snippets(vec![
            snippet("a.rs", 0, 2, "a\nb\nc", 0.1),
            snippet("a.rs", 1, 4, "b\nc\nd\ne", 0.7),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].range, LineRange::new(0, 4));
        assert_eq!(out[0].contents, "a\nb\nc\nd\ne");
        assert_eq!(out[0].score, Some(0.7));
    }

    #[test]
    fn test_adjacent_snippets_concatenate() {
        let out = deduplicate_snippets(vec![
            snippet("a.rs", 0, 1, "a\nb", 0.3),
            snippet("a.rs", 2, 3, "c\nd", 0.2),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].contents, "a\nb\nc\nd");
        assert_eq!(out[0].score, Some(0.3));
    }

    #[test]
    fn test_contained_snippet_is_absorbed() {
        let out = deduplicate_snippets(vec![
            snippet("a.rs", 0, 4, "a\nb\nc\nd\ne", 0.1),
            snippet("a.rs", 1, 2, "b\nc", 0.9),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].contents, "a\nb\nc\nd\ne");
        assert_eq!(out[0].score, Some(0.9));
    }

    #[test]
    fn test_same_start_keeps_longer_snippet() {
        let out = deduplicate_snippets(vec![
            snippet("a.rs", 3, 4, "d\ne", 0.4),
            snippet("a.rs", 3, 6, "d\ne\nf\ng", 0.2),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].range, LineRange::new(3, 6));
        assert_eq!(out[0].contents, "d\ne\nf\ng");
        assert_eq!(out[0].score, Some(0.4));
    }

    #[test]
    fn test_different_files_never_merge() {
        let out = deduplicate_snippets(vec![
            snippet("b.rs", 0, 2, "a\nb\nc", 0.1),
            snippet("a.rs", 0, 2, "a\nb\nc", 0.1),
        ]);
        let paths: Vec<&str> = out.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["a.rs", "b.rs"]);
    }
}
