//! Environment variable utilities
//!
//! Typed lookups with defaults. All configuration in basekit comes through
//! here; see [`crate::vars`] for the names that are read.
//!
//! ```ignore
//! use basekit_core::env::{env_get, env_get_bool};
//!
//! let level: basekit_core::LogLevel = env_get("BASEKIT_LOG_LEVEL", LogLevel::Info);
//! let flush = env_get_bool("BASEKIT_FLUSH_EPRINT", false);
//! ```

use std::str::FromStr;

/// Environment variable parsed as `T`, or `default` if unset or unparseable.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Environment variable as boolean.
///
/// Truthy: "1", "true", "yes", "on". Falsy: "0", "false", "no", "off".
/// Matching is case-insensitive and ignores surrounding whitespace. Anything
/// else, including unset, yields `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => parse_bool(&val).unwrap_or(default),
        Err(_) => default,
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `Some(T)` if the variable is set and parses, `None` otherwise.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Environment variable as string, or `default`.
#[inline]
pub fn env_get_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Set, regardless of value (non-UTF-8 values count as set).
#[inline]
pub fn env_is_set(key: &str) -> bool {
    std::env::var_os(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET: &str = "__BASEKIT_TEST_UNSET_VAR__";

    #[test]
    fn test_env_get_default() {
        let val: usize = env_get(UNSET, 42);
        assert_eq!(val, 42);
    }

    #[test]
    fn test_env_get_bool_default() {
        assert!(env_get_bool(UNSET, true));
        assert!(!env_get_bool(UNSET, false));
    }

    #[test]
    fn test_env_get_opt_none() {
        let val: Option<usize> = env_get_opt(UNSET);
        assert!(val.is_none());
    }

    #[test]
    fn test_env_get_str_default() {
        assert_eq!(env_get_str(UNSET, "hello"), "hello");
    }

    #[test]
    fn test_env_is_set() {
        assert!(!env_is_set(UNSET));
        assert!(env_is_set("PATH"));
    }

    #[test]
    fn test_env_get_trims_value() {
        std::env::set_var("__BASEKIT_TEST_NUM__", " 123 ");
        let val: usize = env_get("__BASEKIT_TEST_NUM__", 0);
        assert_eq!(val, 123);
        std::env::remove_var("__BASEKIT_TEST_NUM__");
    }

    #[test]
    fn test_parse_bool_variants() {
        for t in ["1", "true", "TRUE", "yes", "on", " On "] {
            assert_eq!(parse_bool(t), Some(true), "{:?}", t);
        }
        for f in ["0", "false", "No", "off"] {
            assert_eq!(parse_bool(f), Some(false), "{:?}", f);
        }
        assert_eq!(parse_bool("garbage"), None);
    }

    #[test]
    fn test_env_get_bool_garbage_keeps_default() {
        std::env::set_var("__BASEKIT_TEST_BOOL__", "garbage");
        assert!(env_get_bool("__BASEKIT_TEST_BOOL__", true));
        assert!(!env_get_bool("__BASEKIT_TEST_BOOL__", false));
        std::env::remove_var("__BASEKIT_TEST_BOOL__");
    }

    #[test]
    fn test_env_get_invalid_parse() {
        std::env::set_var("__BASEKIT_TEST_INVALID__", "not_a_number");
        let val: usize = env_get("__BASEKIT_TEST_INVALID__", 99);
        assert_eq!(val, 99);
        std::env::remove_var("__BASEKIT_TEST_INVALID__");
    }
}
