use std::fmt::{self, Display, Write};

use basekit_core::errno::ErrnoGuard;
use basekit_core::ktrace;

use crate::code::{Errno, ErrorCode};
use crate::error::ResultError;
use crate::Result;

/// Appended in place of the rest of a value whose `Display` impl failed.
const FORMAT_ERROR: &str = "<format error>";

/// Where the finished code comes from.
#[derive(Debug)]
enum Slot<E> {
    /// Nothing yet; finishes as `E::default()`.
    Empty,
    /// Taken from an appended `ResultError`. Carried, never rendered.
    Merged(E),
    /// Given at construction. Rendered into the message.
    Explicit(E),
}

/// Streaming error builder.
///
/// Created at the error site, fed text with [`append`](Error::append) and
/// upstream errors with [`append_error`](Error::append_error), then turned
/// into a [`Result`] or [`ResultError`]. It is deliberately not `Clone`.
///
/// The finished message is:
///
/// | constructed with      | text empty        | text non-empty              |
/// |-----------------------|-------------------|-----------------------------|
/// | a code                | `code.render()`   | `"<text>: <code.render()>"` |
/// | no code               | `""`              | `"<text>"`                  |
///
/// ```
/// use basekit_result::{Error, Result};
///
/// fn parse(port: &str) -> Result<u16> {
///     port.parse().map_err(|e| Error::new().append("bad port ").append(e).finish())
/// }
///
/// let err = parse("http").unwrap_err();
/// assert_eq!(err.message(), "bad port invalid digit found in string");
/// assert_eq!(err.code().value(), 0);
/// ```
#[derive(Debug)]
#[must_use = "an error builder does nothing until it is finished"]
pub struct Error<E = Errno> {
    text: String,
    slot: Slot<E>,
}

impl Error<Errno> {
    /// Builder with no code, for the default [`Errno`] code type.
    ///
    /// Other code types start from `Error::<C>::default()` or
    /// [`Error::with_code`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: ErrorCode> Default for Error<E> {
    fn default() -> Self {
        Self {
            text: String::new(),
            slot: Slot::Empty,
        }
    }
}

impl<E: ErrorCode> Error<E> {
    /// Builder carrying `code`. The rendered code is appended to the message.
    pub fn with_code(code: E) -> Self {
        Self {
            text: String::new(),
            slot: Slot::Explicit(code),
        }
    }

    /// Like [`with_code`](Error::with_code) for anything convertible to `E`.
    ///
    /// ```
    /// use basekit_result::{Errno, Error};
    ///
    /// let err = Error::<Errno>::from_code(2).finish();
    /// assert_eq!(*err.code(), 2);
    /// ```
    pub fn from_code<P: Into<E>>(code: P) -> Self {
        Self::with_code(code.into())
    }

    #[doc(hidden)]
    pub fn __from_format(explicit: Option<E>, merged: Option<E>, text: String) -> Self {
        let slot = match (explicit, merged) {
            (Some(code), _) => Slot::Explicit(code),
            (None, Some(code)) => Slot::Merged(code),
            (None, None) => Slot::Empty,
        };
        let mut this = Self { text: String::new(), slot };
        this.push_display(text);
        this
    }

    /// Appends the display form of `value`.
    ///
    /// The calling thread's errno is the same after this call as before it,
    /// whatever the formatting does.
    pub fn append<T: Display>(mut self, value: T) -> Self {
        self.push_display(value);
        self
    }

    /// Appends an upstream error's message and adopts its code if this
    /// builder has none yet. The first code seen wins.
    ///
    /// An adopted code ends up in the finished [`ResultError::code`] but is
    /// not rendered into the message.
    pub fn append_error(mut self, error: &ResultError<E>) -> Self {
        if let Slot::Empty = self.slot {
            self.slot = Slot::Merged(error.code().clone());
        }
        self.push_display(error.message());
        self
    }

    fn push_display<T: Display>(&mut self, value: T) {
        let _errno = ErrnoGuard::save();
        // Writing into a String only fails if the Display impl itself errors.
        if write!(self.text, "{}", value).is_err() {
            self.text.push_str(FORMAT_ERROR);
        }
    }

    /// Text appended so far, without the rendered code.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The code the finished error will carry, if one is set.
    pub fn code(&self) -> Option<&E> {
        match &self.slot {
            Slot::Empty => None,
            Slot::Merged(code) | Slot::Explicit(code) => Some(code),
        }
    }

    /// The message as it would be finished right now.
    pub fn message(&self) -> String {
        match &self.slot {
            Slot::Explicit(code) if self.text.is_empty() => code.render(),
            Slot::Explicit(code) => format!("{}: {}", self.text, code.render()),
            Slot::Empty | Slot::Merged(_) => self.text.clone(),
        }
    }

    pub fn finish(self) -> ResultError<E> {
        let _errno = ErrnoGuard::save();
        let message = self.message();
        let code = match self.slot {
            Slot::Empty => E::default(),
            Slot::Merged(code) | Slot::Explicit(code) => code,
        };
        ktrace!("error: {} ({:?})", message, code);
        ResultError::new(message, code)
    }

    /// Finishes into a different code type that `E` converts to.
    pub fn finish_as<P>(self) -> ResultError<P>
    where
        E: Into<P>,
        P: ErrorCode,
    {
        self.finish().convert()
    }

    /// Finishes into the error arm of a `Result` with any success type.
    pub fn into_result<T>(self) -> Result<T, E> {
        Err(self.finish())
    }
}

impl<E: ErrorCode> Write for Error<E> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_display(s);
        Ok(())
    }
}

impl<E: ErrorCode> From<Error<E>> for ResultError<E> {
    fn from(builder: Error<E>) -> Self {
        builder.finish()
    }
}

impl<T, E: ErrorCode> From<Error<E>> for std::result::Result<T, ResultError<E>> {
    fn from(builder: Error<E>) -> Self {
        builder.into_result()
    }
}

/// Builder carrying the calling thread's current errno.
///
/// errno is read once, immediately, so nothing the caller does afterwards
/// (including appending) can change the captured code.
///
/// ```no_run
/// use basekit_result::{errno_error, Result};
///
/// fn close(fd: i32) -> Result<()> {
///     # let rc = -1;
///     if rc < 0 {
///         return errno_error().append("close fd ").append(fd).into();
///     }
///     Ok(())
/// }
/// ```
pub fn errno_error() -> Error<Errno> {
    Error::with_code(Errno::last())
}
