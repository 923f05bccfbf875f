pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::ReportFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::ChecksConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "confident")]
#[command(about = "Evaluate a list of checks and report the ones that fail")]
pub struct CliConfig {
    /// Path to the TOML file listing the checks
    #[arg(short, long, default_value = "confident.toml")]
    pub config: String,

    /// Write the report to this file (overrides settings.report_path)
    #[arg(short, long)]
    pub report: Option<String>,

    /// Report format (overrides settings.report_format)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋檔案中的設定
    pub fn apply_overrides(&self, config: &mut ChecksConfig) {
        if let Some(report) = &self.report {
            config.settings.report_path = Some(report.clone());
            tracing::info!("🔧 Report path overridden to: {}", report);
        }

        if let Some(format) = self.format {
            config.settings.report_format = Some(format);
            tracing::info!("🔧 Report format overridden to: {:?}", format);
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = CliConfig::parse_from(["confident"]);
        assert_eq!(cli.config, "confident.toml");
        assert!(cli.report.is_none());
        assert!(cli.format.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides_replace_file_settings() {
        let cli = CliConfig::parse_from([
            "confident",
            "--config",
            "checks.toml",
            "--report",
            "out.json",
            "--format",
            "json",
        ]);

        let mut config = ChecksConfig::from_toml_str(
            r#"
[settings]
report_path = "report.txt"
report_format = "text"
"#,
        )
        .unwrap();

        cli.apply_overrides(&mut config);

        assert_eq!(config.report_path(), Some("out.json"));
        assert_eq!(config.report_format(), ReportFormat::Json);
    }
}
