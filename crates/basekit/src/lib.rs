//! # basekit - foundation kit
//!
//! One import for the basekit crates:
//!
//! - [`strings`] - split, tokenize, trim, join, affix tests, replace
//! - [`result`] - `Result<T, E>` with coded errors and the `Error` builder
//! - the `k*` leveled print macros and environment helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use basekit::{errorf, or_return, strings, Result};
//!
//! fn port_of(line: &str) -> Result<u16> {
//!     let mut rest = line;
//!     if !strings::consume_prefix(&mut rest, "port=") {
//!         return errorf!("no port in '{}'", line).into();
//!     }
//!     let fields = strings::tokenize(rest, " \t");
//!     let port = or_return!(fields
//!         .first()
//!         .map(String::as_str)
//!         .unwrap_or("")
//!         .parse::<u16>()
//!         .map_err(|e| errorf!("bad port: {}", e).finish()));
//!     Ok(port)
//! }
//!
//! assert_eq!(port_of("port=8080  # http").unwrap(), 8080);
//! assert_eq!(port_of("host=x").unwrap_err().message(), "no port in 'host=x'");
//! ```
//!
//! ## Environment Variables
//!
//! - `BASEKIT_LOG_LEVEL` - off, error, warn, info, debug, trace (or 0-5)
//! - `BASEKIT_FLUSH_EPRINT` - flush stderr after every print

pub use basekit_result as result;
pub use basekit_strings as strings;

// Re-export result types
pub use basekit_result::{
    errno_error,
    Errno,
    Error,
    ErrorCode,
    Fail,
    IoFail,
    OkOrFail,
    Result,
    ResultError,
    ResultExt,
};

// Re-export result macros
pub use basekit_result::{
    assert_result_ok,
    check_result_ok,
    debug_assert_result_ok,
    errno_errorf,
    errorf,
    or_fatal,
    or_return,
};

// Re-export kprint macros for logging
pub use basekit_core::{kprint, kprintln, kerror, kwarn, kinfo, kdebug, ktrace};
pub use basekit_core::kprint::{LogLevel, init as init_logging, set_log_level, set_flush_enabled};

// Re-export env utilities
pub use basekit_core::{env_get, env_get_bool, env_get_opt, env_get_str, env_is_set};

#[cfg(test)]
mod tests {
    use super::*;

    fn read_config(path: &str) -> Result<String> {
        let text = or_return!(std::fs::read_to_string(path));
        Ok(strings::trim(text))
    }

    #[test]
    #[cfg(unix)]
    fn io_failures_become_coded_errors() {
        let err = read_config("/basekit/does/not/exist").unwrap_err();
        assert_eq!(*err.code(), libc::ENOENT);
        assert_eq!(err.message(), strings::errno_number_as_string(libc::ENOENT));
    }

    #[test]
    fn builder_over_string_helpers() {
        let words = strings::split("a,b,,c", ",");
        let err = Error::new()
            .append("fields: ")
            .append(strings::join(&words, "|"))
            .finish();
        assert_eq!(err.message(), "fields: a|b||c");
    }

    #[test]
    fn errorf_merges_upstream_code() {
        let upstream: Result<()> = Err(ResultError::new("denied", libc::EACCES));
        let outer = errorf!("open {}: {}", "/etc/shadow", upstream.error()).finish();
        assert_eq!(*outer.code(), libc::EACCES);
        assert_eq!(outer.message(), "open /etc/shadow: denied");
    }

    #[test]
    fn macros_reachable_through_umbrella() {
        set_log_level(LogLevel::Off);
        kinfo!("quiet {}", 1);
        let ok: Result<u8> = Ok(2);
        assert_result_ok!(ok);
        check_result_ok!(ok);
        assert_eq!(or_fatal!(ok), 2);
    }
}
