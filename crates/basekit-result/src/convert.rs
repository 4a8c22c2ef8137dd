use std::io;

use crate::code::{Errno, ErrorCode};
use crate::error::ResultError;

// ── From<io::Error> ───────────────────────────────────────────────

impl From<io::Error> for ResultError<Errno> {
    /// OS errors keep their errno and take the host description as the
    /// message. Custom io errors get the default code and their own text.
    fn from(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(raw) => {
                let code = Errno::new(raw);
                ResultError::new(code.render(), code)
            }
            None => ResultError::new(err.to_string(), Errno::default()),
        }
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<ResultError<Errno>> for io::Error {
    /// Wraps the error as a custom io::Error. The kind follows the errno
    /// when one is set.
    fn from(err: ResultError<Errno>) -> Self {
        let kind = match err.code().value() {
            0 => io::ErrorKind::Other,
            raw => io::Error::from_raw_os_error(raw).kind(),
        };
        io::Error::new(kind, err)
    }
}
