use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set. Verbose mode also shows the
/// handler-binding trace events from `core::result`.
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("confident=trace,info")
        } else {
            EnvFilter::new("confident=info")
        }
    })
}

/// Installs the global subscriber. `json` switches to one JSON object per
/// event so check results can be collected by a log pipeline.
pub fn init_logger(verbose: bool, json: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(default_filter(verbose));

    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer.compact()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        assert_eq!(default_filter(false).to_string(), "confident=info");
        assert!(default_filter(true).to_string().contains("confident=trace"));
    }
}
