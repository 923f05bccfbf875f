use crate::domain::model::Check;

/// Where the runner gets its checks from.
pub trait CheckSource {
    fn checks(&self) -> &[Check];

    /// Failure payload for checks that do not carry their own message.
    fn default_failure_message(&self) -> Option<&str> {
        None
    }
}

impl CheckSource for Vec<Check> {
    fn checks(&self) -> &[Check] {
        self
    }
}

impl<S: CheckSource + ?Sized> CheckSource for &S {
    fn checks(&self) -> &[Check] {
        (**self).checks()
    }

    fn default_failure_message(&self) -> Option<&str> {
        (**self).default_failure_message()
    }
}
