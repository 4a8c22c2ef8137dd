//! # basekit-result
//!
//! A success-or-error type whose error arm carries a message and a typed
//! code, plus a streaming builder for constructing that error at the error
//! site.
//!
//! ## Design
//!
//! - [`Result<T, E>`] is `std::result::Result<T, ResultError<E>>`, so `?`,
//!   combinators and pattern matching all work as usual.
//! - [`ResultError<E>`] is the finished, immutable error: message + code.
//! - [`Error<E>`] is the builder. It accumulates text, optionally holds a
//!   code, and turns into a `Result` via `.into()`, `?` or `finish()`.
//! - [`ErrorCode`] is the code capability. [`Errno`] is the built-in one.
//! - [`OkOrFail`] lets [`or_return!`], [`or_fatal!`] and the check macros
//!   work over this `Result` and `std::io::Result` alike.
//!
//! ## Code rules
//!
//! A code given when the builder is constructed is rendered into the
//! message (`"<text>: <render>"`). A code merged from an appended
//! [`ResultError`] is carried but not rendered, and only if the builder has
//! no code yet: the first code wins. With no code at all the finished error
//! carries `E::default()`.
//!
//! ## Quick Start
//!
//! ```rust
//! use basekit_result::{errno_error, errorf, Error, Result};
//!
//! fn parse_count(s: &str) -> Result<u32> {
//!     s.parse()
//!         .map_err(|e| Error::new().append("bad count '").append(s).append("': ").append(e).finish())
//! }
//!
//! fn load(s: &str) -> Result<u32> {
//!     let n = parse_count(s)?;
//!     if n > 100 {
//!         return errorf!("{} is over the limit", n).into();
//!     }
//!     Ok(n)
//! }
//!
//! assert_eq!(load("7").unwrap(), 7);
//! assert_eq!(load("700").unwrap_err().message(), "700 is over the limit");
//! assert!(load("x").unwrap_err().message().starts_with("bad count 'x': "));
//! ```
//!
//! ## Logging
//!
//! Every finished error is traced through `basekit_core::ktrace!`; run with
//! `BASEKIT_LOG_LEVEL=trace` to see them.

mod code;
mod error;
mod builder;
#[macro_use]
mod format;
#[macro_use]
mod ok_or_fail;
#[macro_use]
mod check;
mod ext;
mod convert;

// ── Public API ────────────────────────────────────────────────────

pub use code::{Errno, ErrorCode};
pub use error::ResultError;
pub use builder::{errno_error, Error};
pub use ok_or_fail::{Fail, IoFail, OkOrFail};
pub use ext::ResultExt;

/// Success value or a [`ResultError`] carrying a code of type `E`.
pub type Result<T, E = Errno> = std::result::Result<T, ResultError<E>>;

#[doc(hidden)]
pub mod __private {
    pub use crate::format::{CodeProbe, ProbeCode, ProbeNone};
    pub use crate::ok_or_fail::fatal;
}
