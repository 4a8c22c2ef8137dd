use std::fmt::{Display, Write};

/// Joins the display form of each item with `separator` between them.
///
/// The separator is anything `Display`, not only a string. An empty input
/// yields an empty string.
///
/// ```
/// use basekit_strings::join;
///
/// assert_eq!(join([1, 2, 3], ", "), "1, 2, 3");
/// assert_eq!(join(["a", "b"], '/'), "a/b");
/// assert_eq!(join(Vec::<u8>::new(), "-"), "");
/// ```
pub fn join<I, S>(things: I, separator: S) -> String
where
    I: IntoIterator,
    I::Item: Display,
    S: Display,
{
    let mut out = String::new();
    let mut iter = things.into_iter();
    if let Some(first) = iter.next() {
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", first);
        for item in iter {
            let _ = write!(out, "{}{}", separator, item);
        }
    }
    out
}
