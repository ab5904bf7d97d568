use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error on '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Arithmetic overflow in {operation} for input {input}")]
    ArithmeticOverflow { operation: String, input: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Computation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::ArithmeticOverflow { .. } => ErrorCategory::Computation,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Validation | ErrorCategory::Computation => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { field, message } => {
                format!("Invalid record ({}): {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is not usable: {}", field, reason)
            }
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            Self::ArithmeticOverflow { operation, input } => {
                format!("{} cannot be computed for {} without overflowing", operation, input)
            }
            Self::IoError(e) => format!("File system error: {}", e),
            Self::SerializationError(e) => format!("Could not produce JSON output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => {
                "Check that ages are non-negative and email addresses contain '@'"
            }
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                "Adjust the offending value in the config file or on the command line"
            }
            Self::TomlError(_) => "Make sure the file exists and is valid TOML format",
            Self::ArithmeticOverflow { .. } => "Request fewer fibonacci terms (at most 94)",
            Self::IoError(_) => "Verify the path exists and is readable",
            Self::SerializationError(_) => "Re-run with --verbose and report the failure",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
