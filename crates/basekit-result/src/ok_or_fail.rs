//! The ok-or-fail protocol behind [`or_return!`] and [`or_fatal!`].
//!
//! Any success/failure container can opt in by implementing [`OkOrFail`].
//! The macros only ever talk to the trait, so they work the same over
//! `basekit_result::Result` and `std::io::Result`.

use std::io;

use basekit_core::kerror;

use crate::code::{Errno, ErrorCode};
use crate::error::ResultError;
use crate::Result;

/// Capability of a container that is either "ok with a value" or "failed".
pub trait OkOrFail: Sized {
    /// The success value.
    type Value;
    /// The captured failure arm, convertible into whatever the enclosing
    /// function returns.
    type Failure;

    fn is_ok(&self) -> bool;

    /// Takes the success value.
    ///
    /// # Panics
    ///
    /// If the container holds a failure.
    fn unwrap_value(self) -> Self::Value;

    /// Takes the failure arm for propagation.
    ///
    /// # Panics
    ///
    /// If the container holds a success value.
    fn into_failure(self) -> Self::Failure;

    /// Human-readable failure message.
    ///
    /// # Panics
    ///
    /// If the container holds a success value.
    fn error_message(&self) -> String;
}

/// Failure arm of a [`Result`], detached from its success type.
///
/// Converts into `Result<U, E>` for any `U` and, through
/// [`into_code`](Fail::into_code), into a bare code value.
#[derive(Debug, Clone, PartialEq)]
pub struct Fail<E = Errno>(ResultError<E>);

impl<E: ErrorCode> Fail<E> {
    pub fn error(&self) -> &ResultError<E> {
        &self.0
    }

    pub fn into_error(self) -> ResultError<E> {
        self.0
    }

    /// Re-wraps the same error arm under another success type.
    pub fn into_result<U>(self) -> Result<U, E> {
        Err(self.0)
    }

    /// Drops the message and converts the code.
    ///
    /// ```
    /// use basekit_result::{Errno, OkOrFail, Result, ResultError};
    ///
    /// let r: Result<u8> = Err(ResultError::new("gone", 2));
    /// let raw: i32 = r.into_failure().into_code();
    /// assert_eq!(raw, 2);
    /// ```
    pub fn into_code<S>(self) -> S
    where
        E: Into<S>,
    {
        let (_, code) = self.0.into_parts();
        code.into()
    }
}

impl<U, E: ErrorCode> From<Fail<E>> for std::result::Result<U, ResultError<E>> {
    fn from(fail: Fail<E>) -> Self {
        fail.into_result()
    }
}

impl<E: ErrorCode> From<Fail<E>> for ResultError<E> {
    fn from(fail: Fail<E>) -> Self {
        fail.0
    }
}

impl<T, E: ErrorCode> OkOrFail for Result<T, E> {
    type Value = T;
    type Failure = Fail<E>;

    #[inline]
    fn is_ok(&self) -> bool {
        std::result::Result::is_ok(self)
    }

    #[track_caller]
    fn unwrap_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("unwrap_value() on a failed result: {}", err.message()),
        }
    }

    #[track_caller]
    fn into_failure(self) -> Fail<E> {
        match self {
            Err(err) => Fail(err),
            Ok(_) => panic!("into_failure() on an ok result"),
        }
    }

    #[track_caller]
    fn error_message(&self) -> String {
        match self {
            Err(err) => err.message().to_owned(),
            Ok(_) => panic!("error_message() on an ok result"),
        }
    }
}

/// Failure arm of an `io::Result`.
///
/// Converts back into `io::Result<U>` and across into a
/// `basekit_result::Result<U>`.
#[derive(Debug)]
pub struct IoFail(io::Error);

impl IoFail {
    pub fn error(&self) -> &io::Error {
        &self.0
    }

    pub fn into_error(self) -> io::Error {
        self.0
    }
}

impl<U> From<IoFail> for io::Result<U> {
    fn from(fail: IoFail) -> Self {
        Err(fail.0)
    }
}

impl<U> From<IoFail> for Result<U, Errno> {
    fn from(fail: IoFail) -> Self {
        Err(ResultError::from(fail.0))
    }
}

impl<T> OkOrFail for io::Result<T> {
    type Value = T;
    type Failure = IoFail;

    #[inline]
    fn is_ok(&self) -> bool {
        std::result::Result::is_ok(self)
    }

    #[track_caller]
    fn unwrap_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("unwrap_value() on a failed io result: {}", err),
        }
    }

    #[track_caller]
    fn into_failure(self) -> IoFail {
        match self {
            Err(err) => IoFail(err),
            Ok(_) => panic!("into_failure() on an ok io result"),
        }
    }

    #[track_caller]
    fn error_message(&self) -> String {
        match self {
            Err(err) => err.to_string(),
            Ok(_) => panic!("error_message() on an ok io result"),
        }
    }
}

/// Evaluates to the success value, or returns the failure from the
/// enclosing function.
///
/// ```
/// use basekit_result::{or_return, Error, Result};
///
/// fn half(n: u32) -> Result<u32> {
///     if n % 2 == 1 {
///         return Error::new().append(n).append(" is odd").into();
///     }
///     Ok(n / 2)
/// }
///
/// fn quarter(n: u32) -> Result<String> {
///     let h = or_return!(half(n));
///     Ok(or_return!(half(h)).to_string())
/// }
///
/// assert_eq!(quarter(8).unwrap(), "2");
/// assert_eq!(quarter(6).unwrap_err().message(), "3 is odd");
/// ```
#[macro_export]
macro_rules! or_return {
    ($expr:expr) => {
        match $expr {
            __tmp => {
                if $crate::OkOrFail::is_ok(&__tmp) {
                    $crate::OkOrFail::unwrap_value(__tmp)
                } else {
                    return ::core::convert::From::from($crate::OkOrFail::into_failure(__tmp));
                }
            }
        }
    };
}

/// Evaluates to the success value, or logs the failure and panics.
///
/// An optional format string prefixes the failure message.
#[macro_export]
macro_rules! or_fatal {
    ($expr:expr) => {
        match $expr {
            __tmp => {
                if $crate::OkOrFail::is_ok(&__tmp) {
                    $crate::OkOrFail::unwrap_value(__tmp)
                } else {
                    $crate::__private::fatal(::core::format_args!(
                        "{}",
                        $crate::OkOrFail::error_message(&__tmp)
                    ))
                }
            }
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            __tmp => {
                if $crate::OkOrFail::is_ok(&__tmp) {
                    $crate::OkOrFail::unwrap_value(__tmp)
                } else {
                    $crate::__private::fatal(::core::format_args!(
                        "{}: {}",
                        ::core::format_args!($($arg)+),
                        $crate::OkOrFail::error_message(&__tmp)
                    ))
                }
            }
        }
    };
}

/// Logs at error level, then panics with the same text.
#[doc(hidden)]
#[track_caller]
#[cold]
pub fn fatal(args: std::fmt::Arguments<'_>) -> ! {
    let message = args.to_string();
    kerror!("{}", message);
    panic!("{}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn half(n: u32) -> Result<u32> {
        if n % 2 == 1 {
            return crate::errorf!("{} is odd", n).into();
        }
        Ok(n / 2)
    }

    fn coded(n: u32) -> Result<u32> {
        if n == 0 {
            return Error::with_code(Errno::new(33)).append("zero").into();
        }
        Ok(n)
    }

    #[test]
    fn protocol_on_ok() {
        let r = half(4);
        assert!(OkOrFail::is_ok(&r));
        assert_eq!(OkOrFail::unwrap_value(r), 2);
    }

    #[test]
    fn protocol_on_fail() {
        let r = half(3);
        assert!(!OkOrFail::is_ok(&r));
        assert_eq!(OkOrFail::error_message(&r), "3 is odd");
        let fail = r.into_failure();
        assert_eq!(fail.error().message(), "3 is odd");
    }

    #[test]
    #[should_panic(expected = "unwrap_value() on a failed result: 3 is odd")]
    fn unwrap_value_on_fail_panics() {
        OkOrFail::unwrap_value(half(3));
    }

    #[test]
    #[should_panic(expected = "into_failure() on an ok result")]
    fn into_failure_on_ok_panics() {
        let _ = half(2).into_failure();
    }

    #[test]
    fn failure_changes_success_type() {
        let fail = coded(0).into_failure();
        let moved: Result<Vec<String>> = fail.into();
        let err = moved.unwrap_err();
        assert_eq!(*err.code(), 33);
        assert!(err.message().starts_with("zero: "));
    }

    #[test]
    fn failure_into_bare_code() {
        let code: i32 = coded(0).into_failure().into_code();
        assert_eq!(code, 33);
        let code: Errno = coded(0).into_failure().into_code();
        assert_eq!(code, Errno::new(33));
    }

    #[test]
    fn or_return_propagates() {
        fn chain(n: u32) -> Result<u32> {
            let h = or_return!(half(n));
            let c = or_return!(coded(h));
            Ok(c + 1)
        }
        assert_eq!(chain(4).unwrap(), 3);
        assert_eq!(chain(5).unwrap_err().message(), "5 is odd");
        assert_eq!(*chain(0).unwrap_err().code(), 33);
    }

    #[test]
    fn or_return_over_io_result() {
        fn io_step(fail: bool) -> io::Result<u8> {
            if fail {
                Err(io::Error::from_raw_os_error(2))
            } else {
                Ok(9)
            }
        }
        fn same_shape(fail: bool) -> io::Result<u8> {
            Ok(or_return!(io_step(fail)) + 1)
        }
        fn crossed(fail: bool) -> Result<u8> {
            Ok(or_return!(io_step(fail)) + 1)
        }

        assert_eq!(same_shape(false).unwrap(), 10);
        assert_eq!(same_shape(true).unwrap_err().raw_os_error(), Some(2));
        assert_eq!(crossed(false).unwrap(), 10);
        assert_eq!(*crossed(true).unwrap_err().code(), 2);
    }

    #[test]
    fn io_error_message() {
        let r: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(OkOrFail::error_message(&r), "boom");
        assert_eq!(r.into_failure().error().kind(), io::ErrorKind::Other);
    }

    #[test]
    fn or_fatal_passes_value_through() {
        assert_eq!(or_fatal!(half(10)), 5);
        assert_eq!(or_fatal!(half(10), "halving {}", 10), 5);
    }

    #[test]
    #[should_panic(expected = "7 is odd")]
    fn or_fatal_panics_with_message() {
        basekit_core::set_log_level(basekit_core::LogLevel::Off);
        or_fatal!(half(7));
    }

    #[test]
    #[should_panic(expected = "halving 7: 7 is odd")]
    fn or_fatal_prefix() {
        basekit_core::set_log_level(basekit_core::LogLevel::Off);
        or_fatal!(half(7), "halving {}", 7);
    }
}
