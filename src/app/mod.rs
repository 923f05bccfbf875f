pub mod report;
pub mod runner;

pub use report::{save_report, write_report};
pub use runner::CheckRunner;
