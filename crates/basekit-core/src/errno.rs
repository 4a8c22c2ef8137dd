//! Ambient errno access.
//!
//! errno is thread-local in every libc we target, so none of this needs
//! locking. On unix the value is read and written through `nix`, and codes
//! are described with the XSI `strerror_r` from `libc`. Other platforms fall
//! back to `std::io::Error`.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(unix)] {
        use std::ffi::CStr;

        use nix::errno::Errno;

        /// Current value of the calling thread's errno.
        #[inline]
        pub fn last_raw() -> i32 {
            Errno::last_raw()
        }

        /// Overwrite the calling thread's errno.
        #[inline]
        pub fn set_raw(value: i32) {
            Errno::set_raw(value)
        }

        /// Host strerror text for `errnum`.
        ///
        /// Unknown codes get whatever the platform table says (glibc:
        /// "Unknown error N"). If the table leaves the buffer empty we
        /// produce that text ourselves.
        pub fn describe(errnum: i32) -> String {
            let mut buf = [0 as libc::c_char; 256];
            // SAFETY: buf is valid for buf.len() bytes; strerror_r NUL-terminates
            // on success and on ERANGE truncation.
            unsafe { libc::strerror_r(errnum, buf.as_mut_ptr(), buf.len()) };
            if buf[0] == 0 {
                return format!("Unknown error {}", errnum);
            }
            buf[buf.len() - 1] = 0;
            // SAFETY: terminated above.
            let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
            text.to_string_lossy().into_owned()
        }
    } else {
        /// Current value of the calling thread's last OS error.
        #[inline]
        pub fn last_raw() -> i32 {
            std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
        }

        /// No portable way to write the last OS error here.
        #[inline]
        pub fn set_raw(_value: i32) {}

        pub fn describe(errnum: i32) -> String {
            let text = std::io::Error::from_raw_os_error(errnum).to_string();
            match text.rfind(" (os error ") {
                Some(idx) => text[..idx].to_string(),
                None => text,
            }
        }
    }
}

/// Restores errno to the value it had at construction when dropped.
///
/// ```
/// use basekit_core::errno::{ErrnoGuard, last_raw, set_raw};
///
/// set_raw(5);
/// {
///     let _guard = ErrnoGuard::save();
///     set_raw(99);
/// }
/// # #[cfg(unix)]
/// assert_eq!(last_raw(), 5);
/// ```
#[must_use = "errno is restored when the guard is dropped"]
pub struct ErrnoGuard {
    saved: i32,
}

impl ErrnoGuard {
    #[inline]
    pub fn save() -> Self {
        Self { saved: last_raw() }
    }

    /// The value that will be restored.
    #[inline]
    pub fn saved(&self) -> i32 {
        self.saved
    }
}

impl Drop for ErrnoGuard {
    #[inline]
    fn drop(&mut self) {
        set_raw(self.saved);
    }
}
