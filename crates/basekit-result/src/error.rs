use std::fmt;

use crate::code::{Errno, ErrorCode};

/// The error arm of [`Result`](crate::Result): a finished message and a code.
///
/// Built once when an error path is taken (usually by finishing an
/// [`Error`](crate::Error) builder) and never mutated afterwards. Equality
/// compares both the message and the code.
#[derive(Clone, PartialEq, Eq)]
pub struct ResultError<E = Errno> {
    message: String,
    code: E,
}

impl<E: ErrorCode> ResultError<E> {
    /// ```
    /// use basekit_result::{Errno, ResultError};
    ///
    /// let err: ResultError = ResultError::new("disk on fire", 5);
    /// assert_eq!(err.message(), "disk on fire");
    /// assert_eq!(*err.code(), Errno::new(5));
    /// ```
    pub fn new<M, P>(message: M, code: P) -> Self
    where
        M: Into<String>,
        P: Into<E>,
    {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> &E {
        &self.code
    }

    pub fn into_parts(self) -> (String, E) {
        (self.message, self.code)
    }

    /// Re-types the code, keeping the message.
    pub fn convert<P>(self) -> ResultError<P>
    where
        E: Into<P>,
        P: ErrorCode,
    {
        ResultError {
            message: self.message,
            code: self.code.into(),
        }
    }
}

impl<E> fmt::Display for ResultError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<E: fmt::Debug> fmt::Debug for ResultError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultError")
            .field("message", &self.message)
            .field("code", &self.code)
            .finish()
    }
}

impl<E: ErrorCode> std::error::Error for ResultError<E> {}
