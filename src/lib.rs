pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::{save_report, write_report, CheckRunner};
pub use crate::core::null_object::{wrap, AutoNull, NullObject, OptionExt, Wrapped};
pub use crate::core::result::{
    Result, Variant, DEFAULT_FAILURE_MESSAGE, MISSING_ERROR_HANDLER_MESSAGE,
};
pub use crate::utils::error::ConfidentError;
