use crate::config::toml_config::{TomlConfig, LOG_FORMATS, MAX_FIBONACCI_TERMS, MAX_SQUARE_LIMIT};
use crate::domain::ports::{
    ReportSettings, DEFAULT_FIBONACCI_TERMS, DEFAULT_SQUARE_LIMIT, DEFAULT_TITLE,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_range, Validate};

/// 合併配置檔與命令列之後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub title: String,
    pub fibonacci_terms: u64,
    pub square_limit: u64,
    pub pretty_json: bool,
    pub verbose: bool,
    pub log_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            fibonacci_terms: DEFAULT_FIBONACCI_TERMS,
            square_limit: DEFAULT_SQUARE_LIMIT,
            pretty_json: true,
            verbose: false,
            log_format: "compact".to_string(),
        }
    }
}

impl From<&TomlConfig> for Settings {
    fn from(config: &TomlConfig) -> Self {
        Self {
            title: config.title().to_string(),
            fibonacci_terms: config.fibonacci_terms(),
            square_limit: config.square_limit(),
            pretty_json: config.pretty_json(),
            verbose: config.verbose(),
            log_format: config.log_format().to_string(),
        }
    }
}

impl Settings {
    pub fn uses_json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl ReportSettings for Settings {
    fn title(&self) -> &str {
        &self.title
    }

    fn fibonacci_terms(&self) -> u64 {
        self.fibonacci_terms
    }

    fn square_limit(&self) -> u64 {
        self.square_limit
    }

    fn pretty_json(&self) -> bool {
        self.pretty_json
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("report.title", &self.title)?;
        validate_range("fibonacci_terms", self.fibonacci_terms, 0, MAX_FIBONACCI_TERMS)?;
        validate_range("square_limit", self.square_limit, 0, MAX_SQUARE_LIMIT)?;
        validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}
