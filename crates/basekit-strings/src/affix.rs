//! Prefix/suffix tests and case-insensitive comparison.
//!
//! The `_ignore_case` variants fold ASCII letters only and compare bytes, so
//! a prefix that cuts a multi-byte char in half simply does not match.

#[inline]
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.as_bytes().starts_with(prefix.as_bytes())
}

#[inline]
pub fn starts_with_char(s: &str, prefix: char) -> bool {
    s.starts_with(prefix)
}

pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    let (s, prefix) = (s.as_bytes(), prefix.as_bytes());
    s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[inline]
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.as_bytes().ends_with(suffix.as_bytes())
}

#[inline]
pub fn ends_with_char(s: &str, suffix: char) -> bool {
    s.ends_with(suffix)
}

pub fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    let (s, suffix) = (s.as_bytes(), suffix.as_bytes());
    s.len() >= suffix.len() && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

#[inline]
pub fn equals_ignore_case(lhs: &str, rhs: &str) -> bool {
    lhs.eq_ignore_ascii_case(rhs)
}

/// Drops `prefix` from the front of the view if it is there.
///
/// Returns whether anything was removed. Only the caller's `&str` is
/// narrowed; the underlying string is untouched.
///
/// ```
/// use basekit_strings::consume_prefix;
///
/// let mut view = "key=value";
/// assert!(consume_prefix(&mut view, "key="));
/// assert_eq!(view, "value");
/// assert!(!consume_prefix(&mut view, "key="));
/// assert_eq!(view, "value");
/// ```
pub fn consume_prefix(s: &mut &str, prefix: &str) -> bool {
    match s.strip_prefix(prefix) {
        Some(rest) => {
            *s = rest;
            true
        }
        None => false,
    }
}

/// Suffix counterpart of [`consume_prefix`].
pub fn consume_suffix(s: &mut &str, suffix: &str) -> bool {
    match s.strip_suffix(suffix) {
        Some(rest) => {
            *s = rest;
            true
        }
        None => false,
    }
}
