//! # basekit-core
//!
//! Ambient layer shared by the basekit crates.
//!
//! Nothing in here knows about strings or results. It is the small amount of
//! process-level plumbing the other crates lean on.
//!
//! ## Modules
//!
//! - `kprint` - Kernel-style leveled print macros (stderr)
//! - `env` - Environment variable utilities
//! - `errno` - Ambient errno access and host error-message table

pub mod kprint;
pub mod env;
pub mod errno;

// Re-exports for convenience
pub use kprint::{LogLevel, set_log_level, log_level, level_enabled};
pub use env::{env_get, env_get_bool, env_get_opt, env_get_str, env_is_set};
pub use errno::{ErrnoGuard, describe, last_raw, set_raw};

/// Environment variable names read by this crate.
pub mod vars {
    /// Log level: off, error, warn, info, debug, trace (or 0-5)
    pub const LOG_LEVEL: &str = "BASEKIT_LOG_LEVEL";

    /// Flush stderr after every print when truthy
    pub const FLUSH_EPRINT: &str = "BASEKIT_FLUSH_EPRINT";
}
