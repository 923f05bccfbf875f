//! Null Object substitution for values that may be absent.
//!
//! [`wrap`] hands back the value untouched when there is one, and a
//! [`NullObject`] when there is not. The sink answers every call with itself,
//! so a chain of calls on an absent value is a chain of no-ops.
//!
//! There are two ways to talk to the sink:
//!
//! - the capability traits it implements (`io::Write`, `fmt::Write`,
//!   `Extend`), which keep full static typing. [`Wrapped`] forwards these to
//!   the real value or swallows them.
//! - [`NullObject::send`], a dynamic "any message" entry point. Arguments are
//!   passed as `&dyn Any`, so nothing about them is checked at compile time.
//!   Keep it to the call sites that really need message-style chaining.
//!
//! ```
//! use confident::core::null_object::wrap;
//! use std::io::Write;
//!
//! let mut report = wrap::<std::fs::File>(None);
//! writeln!(report, "nobody will read this").unwrap();
//! assert!(report.is_null());
//! ```

use std::any::Any;
use std::{fmt, io};

/// A receiver that absorbs every message and returns itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullObject;

impl NullObject {
    pub fn new() -> Self {
        Self
    }

    /// Accepts any message with any arguments and returns `self`.
    pub fn send(&self, _message: &str, _args: &[&dyn Any]) -> &Self {
        self
    }

    pub fn send_mut(&mut self, _message: &str, _args: &[&dyn Any]) -> &mut Self {
        self
    }
}

impl io::Write for NullObject {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for NullObject {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}

impl<A> Extend<A> for NullObject {
    fn extend<I: IntoIterator<Item = A>>(&mut self, _iter: I) {}
}

/// The outcome of [`wrap`]: the original value, or the sink standing in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wrapped<T> {
    Value(T),
    Null(NullObject),
}

impl<T> Wrapped<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Wrapped::Null(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Wrapped::Value(value) => Some(value),
            Wrapped::Null(_) => None,
        }
    }

    pub fn null(&self) -> Option<&NullObject> {
        match self {
            Wrapped::Value(_) => None,
            Wrapped::Null(null) => Some(null),
        }
    }

    pub fn as_ref(&self) -> Wrapped<&T> {
        match self {
            Wrapped::Value(value) => Wrapped::Value(value),
            Wrapped::Null(null) => Wrapped::Null(*null),
        }
    }

    pub fn as_mut(&mut self) -> Wrapped<&mut T> {
        match self {
            Wrapped::Value(value) => Wrapped::Value(value),
            Wrapped::Null(null) => Wrapped::Null(*null),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Wrapped::Value(value) => Some(value),
            Wrapped::Null(_) => None,
        }
    }
}

impl<T> From<Option<T>> for Wrapped<T> {
    fn from(value: Option<T>) -> Self {
        wrap(value)
    }
}

impl<W: io::Write> io::Write for Wrapped<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Wrapped::Value(writer) => writer.write(buf),
            Wrapped::Null(null) => io::Write::write(null, buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Wrapped::Value(writer) => writer.flush(),
            Wrapped::Null(null) => io::Write::flush(null),
        }
    }
}

impl<W: fmt::Write> fmt::Write for Wrapped<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self {
            Wrapped::Value(writer) => writer.write_str(s),
            Wrapped::Null(null) => fmt::Write::write_str(null, s),
        }
    }
}

/// Returns `value` untouched when present, a fresh [`NullObject`] otherwise.
pub fn wrap<T>(value: Option<T>) -> Wrapped<T> {
    match value {
        Some(value) => Wrapped::Value(value),
        None => Wrapped::Null(NullObject::new()),
    }
}

/// Namespace alias for [`wrap`].
pub struct AutoNull;

impl AutoNull {
    pub fn wrap<T>(value: Option<T>) -> Wrapped<T> {
        wrap(value)
    }
}

pub trait OptionExt<T> {
    fn or_null(self) -> Wrapped<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_null(self) -> Wrapped<T> {
        wrap(self)
    }
}
