use crate::domain::model::{Check, ReportFormat};
use crate::domain::ports::CheckSource;
use crate::utils::error::{ConfidentError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_not_empty, validate_path, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecksConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub checks: Vec<Check>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub default_failure_message: Option<String>,
    pub report_path: Option<String>,
    pub report_format: Option<ReportFormat>,
}

impl ChecksConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConfidentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfidentError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_not_empty("checks", &self.checks)?;

        for check in &self.checks {
            validate_non_empty_string("checks.name", &check.name)?;

            if let Some(message) = &check.failure_message {
                validate_non_empty_string("checks.failure_message", message)?;
            }
        }

        validate_unique("checks.name", self.checks.iter().map(|c| c.name.as_str()))?;

        if let Some(path) = &self.settings.report_path {
            validate_path("settings.report_path", path)?;
        }

        Ok(())
    }

    pub fn report_path(&self) -> Option<&str> {
        self.settings.report_path.as_deref()
    }

    pub fn report_format(&self) -> ReportFormat {
        self.settings.report_format.unwrap_or_default()
    }
}

impl CheckSource for ChecksConfig {
    fn checks(&self) -> &[Check] {
        &self.checks
    }

    fn default_failure_message(&self) -> Option<&str> {
        self.settings.default_failure_message.as_deref()
    }
}

impl Validate for ChecksConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
