pub mod null_object;
pub mod result;

pub use null_object::{wrap, AutoNull, NullObject, OptionExt, Wrapped};
pub use result::{
    error, from_condition, ok, Result, Variant, DEFAULT_FAILURE_MESSAGE,
    MISSING_ERROR_HANDLER_MESSAGE,
};
