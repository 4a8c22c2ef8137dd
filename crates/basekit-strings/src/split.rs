//! Delimiter-set splitting.
//!
//! `delimiters` is a set of characters, not a separator string: each char in
//! it splits on its own. An empty set is a caller bug and panics.

/// Splits `s` at every char that appears in `delimiters`.
///
/// Empty tokens are kept, so leading, trailing and doubled delimiters show up
/// as `""`. Re-inserting the original delimiters between the tokens gives back
/// `s` exactly.
///
/// # Panics
///
/// If `delimiters` is empty.
pub fn split(s: &str, delimiters: &str) -> Vec<String> {
    assert!(!delimiters.is_empty(), "split: empty delimiter set");
    s.split(|c: char| delimiters.contains(c))
        .map(str::to_owned)
        .collect()
}

/// Like [`split`] but only returns non-empty tokens.
///
/// Runs of delimiters collapse and edge delimiters are dropped, so
/// `join(tokenize(s, d), sep)` does not in general give back `s`.
///
/// # Panics
///
/// If `delimiters` is empty.
pub fn tokenize(s: &str, delimiters: &str) -> Vec<String> {
    assert!(!delimiters.is_empty(), "tokenize: empty delimiter set");
    s.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
