use std::fmt;

/// A structured failure reason carried next to the free-text message.
///
/// `render` must be pure: it is called while building messages and its
/// output ends up verbatim in them.
///
/// Custom codes need no wrapper type; implement the trait on the enum:
///
/// ```
/// use basekit_result::ErrorCode;
///
/// #[derive(Debug, Clone, Copy, Default, PartialEq)]
/// enum Storage {
///     #[default]
///     Unknown,
///     Full,
/// }
///
/// impl ErrorCode for Storage {
///     fn render(&self) -> String {
///         match self {
///             Storage::Unknown => "unknown".into(),
///             Storage::Full => "storage full".into(),
///         }
///     }
/// }
/// ```
pub trait ErrorCode: Clone + Default + PartialEq + fmt::Debug {
    fn render(&self) -> String;
}

/// errno(3) as an error code.
///
/// A distinct type rather than a bare `i32` so it cannot be confused with
/// other integer status codes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Errno(i32);

impl Errno {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Captures the calling thread's errno. Reads it exactly once.
    #[inline]
    pub fn last() -> Self {
        Self(basekit_core::errno::last_raw())
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Explicit conversion into an integer-backed enum or status type.
    ///
    /// ```
    /// use basekit_result::Errno;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Status { NotFound, Other(i32) }
    ///
    /// impl From<i32> for Status {
    ///     fn from(v: i32) -> Self {
    ///         if v == 2 { Status::NotFound } else { Status::Other(v) }
    ///     }
    /// }
    ///
    /// assert_eq!(Errno::new(2).to_enum::<Status>(), Status::NotFound);
    /// ```
    #[inline]
    pub fn to_enum<T: From<i32>>(self) -> T {
        T::from(self.0)
    }
}

impl ErrorCode for Errno {
    fn render(&self) -> String {
        basekit_core::errno::describe(self.0)
    }
}

impl From<i32> for Errno {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Errno> for i32 {
    #[inline]
    fn from(errno: Errno) -> Self {
        errno.0
    }
}

impl PartialEq<i32> for Errno {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Errno({})", self.0)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Errno::default().value(), 0);
        assert_eq!(Errno::default(), 0);
    }

    #[test]
    fn int_conversions() {
        let e: Errno = 13.into();
        assert_eq!(e.value(), 13);
        let raw: i32 = e.into();
        assert_eq!(raw, 13);
    }

    #[test]
    fn render_uses_host_table() {
        assert_eq!(
            Errno::new(libc::ENOENT).render(),
            basekit_core::errno::describe(libc::ENOENT)
        );
        assert_eq!(Errno::new(libc::ENOENT).to_string(), Errno::new(libc::ENOENT).render());
    }

    #[test]
    #[cfg(unix)]
    fn last_captures_current_value() {
        basekit_core::errno::set_raw(libc::EBADF);
        assert_eq!(Errno::last(), libc::EBADF);
    }

    #[test]
    fn debug_shows_number() {
        assert_eq!(format!("{:?}", Errno::new(4)), "Errno(4)");
    }

    #[test]
    fn to_enum_is_explicit() {
        #[derive(Debug, PartialEq)]
        struct Raw(i32);
        impl From<i32> for Raw {
            fn from(v: i32) -> Self {
                Raw(v)
            }
        }
        assert_eq!(Errno::new(7).to_enum::<Raw>(), Raw(7));
    }
}
