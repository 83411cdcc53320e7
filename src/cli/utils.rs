//! Shared CLI utilities.

use anyhow::{Context, Result};
use snippet_symbols::{LineRange, RankedSnippet};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when `path` is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("Failed reading input file: {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed reading stdin")?;
            Ok(buf)
        }
    }
}

/// Split a `path[:START-END]` candidate into its path and 1-based inclusive
/// line span.
pub fn parse_candidate(spec: &str) -> Result<(&str, Option<(usize, usize)>)> {
    let Some((path, span)) = spec.rsplit_once(':') else {
        return Ok((spec, None));
    };
    let Some((start, end)) = span.split_once('-') else {
        return Ok((spec, None));
    };
    let (Ok(start), Ok(end)) = (start.trim().parse::<usize>(), end.trim().parse::<usize>()) else {
        return Ok((spec, None));
    };
    if start == 0 || end < start {
        anyhow::bail!("Invalid line range '{}' in candidate {}", span, spec);
    }
    Ok((path, Some((start, end))))
}

/// Load a candidate snippet from disk.
pub fn load_candidate(spec: &str) -> Result<RankedSnippet> {
    let (path, span) = parse_candidate(spec)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading candidate file: {}", path))?;

    let lines: Vec<&str> = content.lines().collect();
    let last = lines.len().saturating_sub(1);
    let (start, end) = match span {
        Some((start, end)) if !lines.is_empty() && start - 1 > last => {
            anyhow::bail!(
                "Line range {}-{} is past end of {} ({} lines)",
                start,
                end,
                path,
                lines.len()
            );
        }
        Some((start, end)) => ((start - 1).min(last), (end - 1).min(last)),
        None => (0, last),
    };
    let contents = if lines.is_empty() { String::new() } else { lines[start..=end].join("\n") };

    Ok(RankedSnippet::new(path, LineRange::new(start, end), contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_candidate_plain_path() {
        assert_eq!(parse_candidate("src/lib.rs").unwrap(), ("src/lib.rs", None));
    }

    #[test]
    fn test_parse_candidate_with_range() {
        assert_eq!(parse_candidate("src/lib.rs:3-9").unwrap(), ("src/lib.rs", Some((3, 9))));
    }

    #[test]
    fn test_parse_candidate_non_range_suffix_is_part_of_path() {
        assert_eq!(parse_candidate("C:notes-draft").unwrap(), ("C:notes-draft", None));
    }

    #[test]
    fn test_parse_candidate_rejects_inverted_range() {
        assert!(parse_candidate("a.rs:9-3").is_err());
        assert!(parse_candidate("a.rs:0-3").is_err());
    }

    #[test]
    fn test_load_candidate_slices_lines() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("a.rs");
        fs::write(&path, "one\ntwo\nthree\nfour\n").expect("write");

        let spec = format!("{}:2-3", path.display());
        let snippet = load_candidate(&spec).expect("candidate");
        assert_eq!(snippet.contents, "two\nthree");
        assert_eq!(snippet.range, LineRange::new(1, 2));
    }

    #[test]
    fn test_load_candidate_clamps_to_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("a.rs");
        fs::write(&path, "one\ntwo\n").expect("write");

        let spec = format!("{}:2-50", path.display());
        let snippet = load_candidate(&spec).expect("candidate");
        assert_eq!(snippet.contents, "two");
        assert_eq!(snippet.range, LineRange::new(1, 1));
    }

    #[test]
    fn test_load_candidate_rejects_range_past_end() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("a.rs");
        fs::write(&path, "one\ntwo\n").expect("write");

        let spec = format!("{}:10-20", path.display());
        let err = load_candidate(&spec).expect_err("range starts past the last line");
        assert!(err.to_string().contains("is past end of"), "unexpected error: {err}");
        assert!(err.to_string().contains("(2 lines)"), "unexpected error: {err}");
    }
}
