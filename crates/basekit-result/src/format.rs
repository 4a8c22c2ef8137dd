//! Formatted error construction.
//!
//! `errorf!` and `errno_errorf!` are the template forms of the streaming
//! builder. The template is checked at compile time by `format!`.
//!
//! ```
//! use basekit_result::{errorf, Result};
//!
//! fn check(n: usize) -> Result<()> {
//!     if n > 3 {
//!         return errorf!("{} errors", n).into();
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check(5).unwrap_err().message(), "5 errors");
//! ```

use crate::code::Errno;
use crate::error::ResultError;

/// Builds an [`Error`](crate::Error) with no explicit code from a format
/// template.
///
/// If an argument is a `ResultError<Errno>`, the last such argument supplies
/// the finished error's code (not rendered into the message). Otherwise the
/// code is the default. Every argument is evaluated exactly once.
///
/// ```
/// use basekit_result::{errorf, Errno, ResultError};
///
/// let upstream: ResultError = ResultError::new("no such file", 2);
/// let err = errorf!("loading {}: {}", "config", upstream).finish();
/// assert_eq!(err.message(), "loading config: no such file");
/// assert_eq!(*err.code(), Errno::new(2));
/// ```
#[macro_export]
macro_rules! errorf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__errorf_bind!(::core::option::Option::None; $fmt; []; $($arg,)*)
    };
}

/// Like [`errorf!`] but carrying the calling thread's errno.
///
/// errno is captured before any argument is evaluated. The finished message
/// is `"<formatted>: <strerror>"`.
#[macro_export]
macro_rules! errno_errorf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        let __errno = $crate::Errno::last();
        $crate::__errorf_bind!(::core::option::Option::Some(__errno); $fmt; []; $($arg,)*)
    }};
}

/// Binds each argument to its own local, then formats.
#[doc(hidden)]
#[macro_export]
macro_rules! __errorf_bind {
    ($explicit:expr; $fmt:literal; [$($bound:ident)*];) => {{
        #[allow(unused_imports)]
        use $crate::__private::{ProbeCode as _, ProbeNone as _};
        #[allow(unused_mut)]
        let mut __merged: ::core::option::Option<$crate::Errno> = ::core::option::Option::None;
        $(
            if let ::core::option::Option::Some(__code) =
                (&$crate::__private::CodeProbe($bound)).probe_code()
            {
                __merged = ::core::option::Option::Some(__code);
            }
        )*
        $crate::Error::<$crate::Errno>::__from_format(
            $explicit,
            __merged,
            ::std::format!($fmt $(, $bound)*),
        )
    }};
    ($explicit:expr; $fmt:literal; [$($bound:ident)*]; $head:expr, $($rest:expr,)*) => {{
        let __arg = &$head;
        $crate::__errorf_bind!($explicit; $fmt; [$($bound)* __arg]; $($rest,)*)
    }};
}

/// Compile-time "is this argument a `ResultError<Errno>`" check.
///
/// `(&CodeProbe(arg)).probe_code()` resolves to [`ProbeCode`] when the
/// argument is a `ResultError<Errno>` (one autoref level) and to
/// [`ProbeNone`] otherwise (two levels).
#[doc(hidden)]
pub struct CodeProbe<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait ProbeCode {
    fn probe_code(&self) -> Option<Errno>;
}

impl ProbeCode for CodeProbe<'_, ResultError<Errno>> {
    fn probe_code(&self) -> Option<Errno> {
        Some(*self.0.code())
    }
}

impl ProbeCode for CodeProbe<'_, &ResultError<Errno>> {
    fn probe_code(&self) -> Option<Errno> {
        Some(*self.0.code())
    }
}

#[doc(hidden)]
pub trait ProbeNone {
    fn probe_code(&self) -> Option<Errno>;
}

impl<T: ?Sized> ProbeNone for &CodeProbe<'_, T> {
    fn probe_code(&self) -> Option<Errno> {
        None
    }
}
