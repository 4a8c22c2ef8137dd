//! "Must be ok" checks over anything implementing [`OkOrFail`](crate::OkOrFail).
//!
//! `check_result_ok!` is always on and logs before panicking.
//! `assert_result_ok!` behaves like `assert!` and `debug_assert_result_ok!`
//! like `debug_assert!`.

/// Panics (after logging at error level) if the result is not ok.
#[macro_export]
macro_rules! check_result_ok {
    ($expr:expr) => {{
        let __result = &$expr;
        if !$crate::OkOrFail::is_ok(__result) {
            $crate::__private::fatal(::core::format_args!(
                "check failed: {} is not ok: {}",
                ::core::stringify!($expr),
                $crate::OkOrFail::error_message(__result)
            ));
        }
    }};
}

/// Asserts the result is ok, panicking with its failure message.
///
/// ```
/// use basekit_result::{assert_result_ok, Result};
///
/// let r: Result<u8> = Ok(1);
/// assert_result_ok!(r);
/// assert_result_ok!(std::fs::metadata("."));
/// ```
#[macro_export]
macro_rules! assert_result_ok {
    ($expr:expr) => {{
        let __result = &$expr;
        ::core::assert!(
            $crate::OkOrFail::is_ok(__result),
            "{} is not ok: {}",
            ::core::stringify!($expr),
            $crate::OkOrFail::error_message(__result)
        );
    }};
    ($expr:expr, $($arg:tt)+) => {{
        let __result = &$expr;
        ::core::assert!(
            $crate::OkOrFail::is_ok(__result),
            "{}: {}",
            ::core::format_args!($($arg)+),
            $crate::OkOrFail::error_message(__result)
        );
    }};
}

/// [`assert_result_ok!`] in debug builds only.
#[macro_export]
macro_rules! debug_assert_result_ok {
    ($($arg:tt)+) => {
        if ::core::cfg!(debug_assertions) {
            $crate::assert_result_ok!($($arg)+);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Result, ResultError};
    use std::io;

    fn good() -> Result<u8> {
        Ok(1)
    }

    fn bad() -> Result<u8> {
        Err(ResultError::new("bad sector", 5))
    }

    #[test]
    fn ok_results_pass() {
        check_result_ok!(good());
        assert_result_ok!(good());
        assert_result_ok!(good(), "reading {}", "header");
        debug_assert_result_ok!(good());
        let io_ok: io::Result<()> = Ok(());
        assert_result_ok!(io_ok);
    }

    #[test]
    #[should_panic(expected = "bad() is not ok: bad sector")]
    fn assert_reports_expression_and_message() {
        assert_result_ok!(bad());
    }

    #[test]
    #[should_panic(expected = "reading header: bad sector")]
    fn assert_with_custom_prefix() {
        assert_result_ok!(bad(), "reading {}", "header");
    }

    #[test]
    #[should_panic(expected = "check failed: bad() is not ok: bad sector")]
    fn check_panics() {
        basekit_core::set_log_level(basekit_core::LogLevel::Off);
        check_result_ok!(bad());
    }

    #[test]
    #[should_panic(expected = "is not ok")]
    fn assert_over_io_result() {
        let r: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "eof"));
        assert_result_ok!(r);
    }
}
