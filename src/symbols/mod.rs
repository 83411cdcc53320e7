//! Symbol extraction for lexical snippet fingerprints
//!
//! A snippet is reduced to the set of maximal runs of characters that contain
//! no delimiter. This is not a lexer: it knows nothing about string literals,
//! comments or multi-character operators, which keeps it cheap enough to run
//! on every ranking decision and language-agnostic.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Unordered, deduplicated symbols of a snippet.
pub type SymbolSet = HashSet<String>;

/// Punctuation that separates symbols in addition to whitespace.
pub const PUNCTUATION_DELIMITERS: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')', '[', ']',
];

/// The delimiter class as a single character class, built from
/// `PUNCTUATION_DELIMITERS`.
///
/// `\s` covers Unicode `White_Space`; U+FEFF is added because editors hand us
/// buffers with a leading byte order mark and it must not glue onto the first
/// symbol.
static SYMBOL_DELIMITERS: Lazy<Regex> = Lazy::new(|| {
    let punctuation: String =
        PUNCTUATION_DELIMITERS.iter().map(|c| regex::escape(&c.to_string())).collect();
    Regex::new(&format!(r"[\s\x{{FEFF}}{}]", punctuation)).unwrap()
});

/// Whether `c` separates two symbols.
pub fn is_symbol_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}' || PUNCTUATION_DELIMITERS.contains(&c)
}

/// Split `snippet` into its set of unique, non-empty symbols.
///
/// Underscore and hyphen are delimiters, so `snake_case` yields `snake` and
/// `case`.
///
/// # Examples
///
/// ```
/// use snippet_symbols::extract_symbols;
///
/// let symbols = extract_symbols("foo.bar(baz)");
/// assert_eq!(symbols.len(), 3);
/// assert!(symbols.contains("bar"));
/// ```
pub fn extract_symbols(snippet: &str) -> SymbolSet {
    SYMBOL_DELIMITERS
        .split(snippet)
        .map(|segment| segment.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}'))
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
