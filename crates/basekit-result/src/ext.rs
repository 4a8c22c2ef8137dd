use std::fmt::Display;

use crate::code::ErrorCode;
use crate::error::ResultError;
use crate::Result;

/// Arm accessors and context annotation for [`Result`].
///
/// Reading the wrong arm is a contract violation and panics at the caller.
///
/// ```
/// use basekit_result::{Result, ResultError, ResultExt};
///
/// let ok: Result<u8> = Ok(3);
/// assert_eq!(*ok.value(), 3);
///
/// let failed: Result<u8> = Err(ResultError::new("no disk", 19));
/// let failed = failed.context("mounting /data");
/// assert_eq!(failed.error().message(), "mounting /data: no disk");
/// assert_eq!(failed.error().code().value(), 19);
/// ```
pub trait ResultExt<T, E> {
    fn value(&self) -> &T;

    fn value_mut(&mut self) -> &mut T;

    fn into_value(self) -> T;

    fn error(&self) -> &ResultError<E>;

    fn into_error(self) -> ResultError<E>;

    /// Prefixes the error message with `"<msg>: "`, keeping the code.
    fn context<M: Display>(self, msg: M) -> Result<T, E>;

    /// Like [`context`](ResultExt::context), building the prefix only on
    /// the error arm.
    fn with_context<M, F>(self, f: F) -> Result<T, E>
    where
        M: Display,
        F: FnOnce() -> M;
}

impl<T, E: ErrorCode> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn value(&self) -> &T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("value() on an error result: {}", err.message()),
        }
    }

    #[track_caller]
    fn value_mut(&mut self) -> &mut T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("value_mut() on an error result: {}", err.message()),
        }
    }

    #[track_caller]
    fn into_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("into_value() on an error result: {}", err.message()),
        }
    }

    #[track_caller]
    fn error(&self) -> &ResultError<E> {
        match self {
            Err(err) => err,
            Ok(_) => panic!("error() on an ok result"),
        }
    }

    #[track_caller]
    fn into_error(self) -> ResultError<E> {
        match self {
            Err(err) => err,
            Ok(_) => panic!("into_error() on an ok result"),
        }
    }

    fn context<M: Display>(self, msg: M) -> Result<T, E> {
        self.map_err(|err| {
            let (message, code) = err.into_parts();
            ResultError::new(format!("{}: {}", msg, message), code)
        })
    }

    fn with_context<M, F>(self, f: F) -> Result<T, E>
    where
        M: Display,
        F: FnOnce() -> M,
    {
        self.map_err(|err| {
            let (message, code) = err.into_parts();
            ResultError::new(format!("{}: {}", f(), message), code)
        })
    }
}
