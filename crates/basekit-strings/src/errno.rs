/// Human-readable text for an errno value, from the host's error table.
///
/// Unknown values get the platform's fallback text (never an empty string).
///
/// ```
/// use basekit_strings::errno_number_as_string;
///
/// assert!(!errno_number_as_string(2).is_empty());
/// ```
pub fn errno_number_as_string(errnum: i32) -> String {
    basekit_core::errno::describe(errnum)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn matches_io_error_text() {
        let ours = errno_number_as_string(2);
        let io_text = std::io::Error::from_raw_os_error(2).to_string();
        assert!(io_text.starts_with(&ours), "{:?} / {:?}", ours, io_text);
    }

    #[test]
    fn unknown_code_has_text() {
        assert!(!errno_number_as_string(-12345).is_empty());
    }
}
