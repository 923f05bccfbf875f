use clap::Parser;
use confident::config::toml_config::ChecksConfig;
use confident::utils::{logger, validation::Validate};
use confident::{save_report, CheckRunner, CliConfig};

/// Exit codes: 0 when every check passes, 1 when a check fails, 2 when the
/// config cannot be loaded or the report cannot be written.
fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("🚀 Starting confident");
    tracing::info!("📁 Loading checks from: {}", cli.config);

    let mut config = match ChecksConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let format = config.report_format();
    let report_path = config.report_path().map(str::to_owned);
    let report = CheckRunner::new(&config).run();

    // 沒有指定報告路徑時，寫入 NullObject
    if let Err(e) = save_report(&report, format, report_path.as_deref()) {
        tracing::error!("❌ Failed to write report: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    if let Some(path) = &report_path {
        tracing::info!("📁 Report saved to: {}", path);
    }

    println!(
        "{} checks, {} passed, {} failed",
        report.total(),
        report.passed.len(),
        report.failed.len()
    );

    if !report.is_success() {
        for failure in &report.failed {
            eprintln!("❌ {}: {}", failure.name, failure.message);
        }
        std::process::exit(1);
    }

    tracing::info!("✅ All checks passed");
    Ok(())
}
