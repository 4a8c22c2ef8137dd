//! # basekit-strings
//!
//! Stateless string helpers. Everything here is a pure function over `&str`
//! except [`consume_prefix`]/[`consume_suffix`], which narrow a caller's
//! `&str` view in place.
//!
//! Case folding and whitespace classification are ASCII-only. Bytes outside
//! ASCII pass through unexamined.
//!
//! ```
//! use basekit_strings::{split, tokenize, join, trim, string_replace};
//!
//! assert_eq!(split("a,,b", ","), ["a", "", "b"]);
//! assert_eq!(tokenize(" foo  bar ", " "), ["foo", "bar"]);
//! assert_eq!(join(tokenize(" foo  bar ", " "), " "), "foo bar");
//! assert_eq!(trim("  hi there  "), "hi there");
//! assert_eq!(string_replace("aXaXa", "X", "Y", true), "aYaYa");
//! ```
//!
//! ## Modules
//!
//! - `split` - `split` and `tokenize`
//! - `trim` - C-locale whitespace trimming
//! - `join` - Display-based joining
//! - `affix` - prefix/suffix tests, case-insensitive equality, consume
//! - `replace` - first/all substring replacement
//! - `errno` - errno number to message

mod split;
mod trim;
mod join;
mod affix;
mod replace;
mod errno;

pub use split::{split, tokenize};
pub use trim::{trim, is_space};
pub use join::join;
pub use affix::{
    consume_prefix, consume_suffix, ends_with, ends_with_char, ends_with_ignore_case,
    equals_ignore_case, starts_with, starts_with_char, starts_with_ignore_case,
};
pub use replace::string_replace;
pub use errno::errno_number_as_string;
