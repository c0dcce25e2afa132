use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("{field} cannot be empty")]
    EmptyInput { field: String },

    #[error("Ticker '{ticker}' not found")]
    CompanyNotFound { ticker: String },

    #[error("No filings found for CIK {cik}")]
    NoFilingsFound { cik: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Lookup,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SecError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        SecError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SecError::ValidationError { .. } | SecError::EmptyInput { .. } => {
                ErrorCategory::Validation
            }
            SecError::CompanyNotFound { .. } | SecError::NoFilingsFound { .. } => {
                ErrorCategory::Lookup
            }
            SecError::ConfigError { .. }
            | SecError::ConfigValidationError { .. }
            | SecError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SecError::IoError(_) | SecError::SerializationError(_) | SecError::CsvError(_) => {
                ErrorCategory::Io
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查無資料不算系統故障
            ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SecError::EmptyInput { field } => format!("Provide a non-blank value for {}", field),
            SecError::CompanyNotFound { .. } => {
                "Check the ticker symbol against the companies dataset".to_string()
            }
            SecError::NoFilingsFound { .. } => {
                "Make sure a filings dataset is loaded and the CIK is zero-padded to 10 digits"
                    .to_string()
            }
            SecError::ValidationError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            SecError::ConfigError { .. }
            | SecError::ConfigValidationError { .. }
            | SecError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags".to_string()
            }
            SecError::IoError(_) => "Check that the dataset paths exist and are readable".to_string(),
            SecError::SerializationError(_) => {
                "Make sure the dataset files are valid JSON in the expected shape".to_string()
            }
            SecError::CsvError(_) => "Try a different output format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Lookup => format!("Nothing matched: {}", self),
            ErrorCategory::Validation => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Could not read or write data: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SecError>;
