use anyhow::Result;
use confident::config::toml_config::ChecksConfig;
use confident::domain::model::{Report, ReportFormat};
use confident::utils::validation::Validate;
use confident::{wrap, write_report, CheckRunner};
use std::fs::File;
use tempfile::TempDir;

const CHECKS: &str = r#"
[settings]
default_failure_message = "expected this to hold"

[[checks]]
name = "config-present"
condition = true

[[checks]]
name = "cache-warm"
condition = false

[[checks]]
name = "migrations-applied"
condition = false
failure_message = "2 migrations pending"
"#;

#[test]
fn test_run_checks_from_file_and_write_json_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("confident.toml");
    let report_path = temp_dir.path().join("report.json");
    std::fs::write(&config_path, CHECKS)?;

    let config = ChecksConfig::from_file(&config_path)?;
    config.validate()?;

    let report = CheckRunner::new(&config).run();
    assert_eq!(report.passed, vec!["config-present".to_string()]);
    assert_eq!(report.failed.len(), 2);
    assert_eq!(report.failed[0].message, "expected this to hold");
    assert_eq!(report.failed[1].message, "2 migrations pending");

    let mut out = wrap(Some(File::create(&report_path)?));
    write_report(&report, ReportFormat::Json, &mut out)?;

    let written: Report = serde_json::from_str(&std::fs::read_to_string(&report_path)?)?;
    assert_eq!(written, report);
    Ok(())
}

#[test]
fn test_default_failure_message_when_settings_omit_it() -> Result<()> {
    let config = ChecksConfig::from_toml_str(
        r#"
[[checks]]
name = "always-false"
condition = false
"#,
    )?;

    let report = CheckRunner::new(&config).run();
    assert_eq!(report.failed[0].message, confident::DEFAULT_FAILURE_MESSAGE);
    Ok(())
}

#[test]
fn test_report_without_path_goes_to_null_sink() -> Result<()> {
    let config = ChecksConfig::from_toml_str(CHECKS)?;
    let report = CheckRunner::new(&config).run();

    let file = config.report_path().map(File::create).transpose()?;
    let mut out = wrap(file);
    write_report(&report, config.report_format(), &mut out)?;

    assert!(out.is_null());
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let config = ChecksConfig::from_toml_str(
        r#"
[[checks]]
name = "dup"
condition = true

[[checks]]
name = "dup"
condition = false
"#,
    )?;

    let err = config.validate().unwrap_err();
    assert!(err.is_config_error());
    Ok(())
}
