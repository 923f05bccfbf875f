use crate::core::result::{Result, DEFAULT_FAILURE_MESSAGE};
use crate::domain::model::{CheckFailure, Report};
use crate::domain::ports::CheckSource;

pub struct CheckRunner<S: CheckSource> {
    source: S,
}

impl<S: CheckSource> CheckRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Evaluates every check and collects what passed and what failed.
    pub fn run(&self) -> Report {
        let mut report = Report::default();
        let default_message = self
            .source
            .default_failure_message()
            .unwrap_or(DEFAULT_FAILURE_MESSAGE);

        for check in self.source.checks() {
            let message = check.failure_message.as_deref().unwrap_or(default_message);
            let result = Result::from_condition_with(check.condition, message);
            let passed = result.is_ok();

            result
                .on_error(|message| {
                    tracing::warn!("❌ Check '{}' failed: {}", check.name, message);
                    report.failed.push(CheckFailure {
                        name: check.name.clone(),
                        message: message.to_string(),
                    });
                })
                .unwrap();

            if passed {
                tracing::info!("✅ Check '{}' passed", check.name);
                report.passed.push(check.name.clone());
            }
        }

        tracing::debug!(
            "Ran {} checks, {} failed",
            report.total(),
            report.failed.len()
        );

        report
    }
}
