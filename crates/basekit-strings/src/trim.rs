/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Differs from [`char::is_ascii_whitespace`], which leaves out `\v`.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strips [`is_space`] characters from both ends of `s`.
///
/// Interior whitespace is untouched and nothing outside ASCII counts as
/// whitespace (U+00A0 and friends survive).
pub fn trim<S: AsRef<str>>(s: S) -> String {
    s.as_ref().trim_matches(is_space).to_owned()
}
