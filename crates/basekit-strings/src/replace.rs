/// Replaces `from` with `to` in `s`: the first match only, or every
/// non-overlapping match when `all` is set.
///
/// Matching scans left to right and resumes right after each match, so text
/// introduced by `to` is never matched again. An empty `from` matches
/// nothing and the input comes back unchanged.
///
/// ```
/// use basekit_strings::string_replace;
///
/// assert_eq!(string_replace("aXaXa", "X", "Y", false), "aYaXa");
/// assert_eq!(string_replace("aXaXa", "X", "Y", true), "aYaYa");
/// ```
#[must_use]
pub fn string_replace(s: &str, from: &str, to: &str, all: bool) -> String {
    if from.is_empty() {
        return s.to_owned();
    }
    if all {
        s.replace(from, to)
    } else {
        s.replacen(from, to, 1)
    }
}
