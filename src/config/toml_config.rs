use crate::domain::ports::{
    ReportSettings, DEFAULT_FIBONACCI_TERMS, DEFAULT_SQUARE_LIMIT, DEFAULT_TITLE,
};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_FIBONACCI_TERMS: u64 = 94;
pub const MAX_SQUARE_LIMIT: u64 = 1_000_000;
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub title: Option<String>,
    pub fibonacci_terms: Option<u64>,
    pub square_limit: Option<u64>,
    pub pretty_json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ROSTER_TITLE})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(report) = &self.report {
            if let Some(title) = &report.title {
                validate_non_empty_string("report.title", title)?;
            }
            if let Some(terms) = report.fibonacci_terms {
                validate_range("report.fibonacci_terms", terms, 0, MAX_FIBONACCI_TERMS)?;
            }
            if let Some(limit) = report.square_limit {
                validate_range("report.square_limit", limit, 0, MAX_SQUARE_LIMIT)?;
            }
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }

    pub fn log_format(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .unwrap_or("compact")
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ReportSettings for TomlConfig {
    fn title(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
    }

    fn fibonacci_terms(&self) -> u64 {
        self.report
            .as_ref()
            .and_then(|r| r.fibonacci_terms)
            .unwrap_or(DEFAULT_FIBONACCI_TERMS)
    }

    fn square_limit(&self) -> u64 {
        self.report
            .as_ref()
            .and_then(|r| r.square_limit)
            .unwrap_or(DEFAULT_SQUARE_LIMIT)
    }

    fn pretty_json(&self) -> bool {
        self.report
            .as_ref()
            .and_then(|r| r.pretty_json)
            .unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
