//! A success-or-failure value that refuses to be unwrapped until the caller
//! has said what should happen on the failure path.
//!
//! ```
//! use confident::Result;
//!
//! let port: u16 = Result::<u16, String>::error("PORT is not a number".to_string())
//!     .on_error(|_message| 8080u16)
//!     .unwrap();
//! assert_eq!(port, 8080);
//! ```
//!
//! A handler is required on the success path as well, even though it is never
//! called there:
//!
//! ```should_panic
//! use confident::Result;
//!
//! let value = Result::<i32, String>::ok(1).unwrap();
//! ```

use crate::utils::error::ConfidentError;
use std::fmt;

/// Failure payload used by [`Result::from_condition`].
pub const DEFAULT_FAILURE_MESSAGE: &str = "Condition should be true";

pub const MISSING_ERROR_HANDLER_MESSAGE: &str =
    "You haven't specified an error handler for this result, use `on_error` for that";

enum Outcome<T, E> {
    Ok(T),
    Error(E),
}

/// Borrowed view of the variant a [`Result`] holds.
#[derive(Debug, PartialEq, Eq)]
pub enum Variant<'a, T, E> {
    Ok(&'a T),
    Error(&'a E),
}

/// Either a success payload `T` or a failure payload `E`, plus an optional
/// error handler `F`.
///
/// The only ways in are [`Result::ok`], [`Result::error`],
/// [`Result::from_condition`] and [`Result::from_condition_with`]. Building
/// one by hand does not compile:
///
/// ```compile_fail
/// use confident::Result;
///
/// let r: Result<i32, String> = Result { outcome: todo!(), handler: None };
/// ```
///
/// and neither does naming a variant directly:
///
/// ```compile_fail
/// let r = confident::core::result::Outcome::<i32, String>::Ok(1);
/// ```
pub struct Result<T, E, F = fn(E) -> T> {
    outcome: Outcome<T, E>,
    handler: Option<F>,
}

impl<T, E> Result<T, E> {
    pub fn ok(payload: T) -> Self {
        Self::unbound(Outcome::Ok(payload))
    }

    pub fn error(payload: E) -> Self {
        Self::unbound(Outcome::Error(payload))
    }

    fn unbound(outcome: Outcome<T, E>) -> Self {
        Self {
            outcome,
            handler: None,
        }
    }
}

impl<E> Result<(), E> {
    /// `ok(())` when `condition` holds, otherwise `error(failure_message)`.
    pub fn from_condition_with(condition: bool, failure_message: E) -> Self {
        if condition {
            Self::ok(())
        } else {
            Self::error(failure_message)
        }
    }
}

impl Result<(), &'static str> {
    /// Like [`Result::from_condition_with`] with [`DEFAULT_FAILURE_MESSAGE`].
    pub fn from_condition(condition: bool) -> Self {
        Self::from_condition_with(condition, DEFAULT_FAILURE_MESSAGE)
    }
}

impl<T, E, F> Result<T, E, F> {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Ok(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    pub fn variant(&self) -> Variant<'_, T, E> {
        match &self.outcome {
            Outcome::Ok(payload) => Variant::Ok(payload),
            Outcome::Error(payload) => Variant::Error(payload),
        }
    }

    pub fn has_error_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Binds `handler` as the error handler, replacing any earlier one.
    ///
    /// The handler is not called here. On `unwrap` it receives the failure
    /// payload, and its return value becomes the unwrapped value.
    pub fn on_error<G, R>(self, handler: G) -> Result<T, E, G>
    where
        G: FnOnce(E) -> R,
    {
        tracing::trace!(
            ok = self.is_ok(),
            rebound = self.handler.is_some(),
            "error handler bound"
        );

        Result {
            outcome: self.outcome,
            handler: Some(handler),
        }
    }
}

impl<T, E, F> Result<T, E, F>
where
    F: FnOnce(E) -> T,
{
    /// Returns the success payload, or the handler's answer for the failure
    /// payload. Fails with [`ConfidentError::MissingErrorHandler`] when no
    /// handler was bound, whichever variant this is.
    ///
    /// Consumes the result, so a result is unwrapped at most once. Use
    /// [`Result::variant`] or [`Result::is_ok`] to look without consuming.
    pub fn try_unwrap(self) -> std::result::Result<T, ConfidentError> {
        self.try_unwrap_into()
    }

    /// Same as [`Result::try_unwrap`], but a missing handler panics.
    ///
    /// Consumes the result, so a second unwrap does not compile:
    ///
    /// ```compile_fail
    /// let result = confident::Result::<i32, String>::ok(1).on_error(|_| 0);
    /// result.unwrap();
    /// result.unwrap();
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, E, F> Result<T, E, F> {
    /// Like [`Result::try_unwrap`] for handlers whose answer converts into `T`.
    pub fn try_unwrap_into<R>(self) -> std::result::Result<T, ConfidentError>
    where
        F: FnOnce(E) -> R,
        R: Into<T>,
    {
        let Some(handler) = self.handler else {
            tracing::trace!("unwrap called without an error handler");
            return Err(ConfidentError::MissingErrorHandler);
        };

        match self.outcome {
            Outcome::Ok(payload) => Ok(payload),
            Outcome::Error(payload) => Ok(handler(payload).into()),
        }
    }

    /// Like [`Result::unwrap`] for handlers whose answer converts into `T`.
    #[track_caller]
    pub fn unwrap_into<R>(self) -> T
    where
        F: FnOnce(E) -> R,
        R: Into<T>,
    {
        match self.try_unwrap_into() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug, F> fmt::Debug for Result<T, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handler = if self.has_error_handler() {
            "bound"
        } else {
            "unbound"
        };

        match &self.outcome {
            Outcome::Ok(payload) => f
                .debug_struct("Ok")
                .field("payload", payload)
                .field("handler", &handler)
                .finish(),
            Outcome::Error(payload) => f
                .debug_struct("Error")
                .field("payload", payload)
                .field("handler", &handler)
                .finish(),
        }
    }
}

pub fn ok<T, E>(payload: T) -> Result<T, E> {
    Result::ok(payload)
}

pub fn error<T, E>(payload: E) -> Result<T, E> {
    Result::error(payload)
}

pub fn from_condition(condition: bool) -> Result<(), &'static str> {
    Result::from_condition(condition)
}
