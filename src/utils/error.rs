use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{source_name} responded with HTTP {status} for {url}")]
    HttpStatusError {
        source_name: String,
        status: u16,
        url: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SurveyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SurveyError::ApiError(_) | SurveyError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            SurveyError::ConfigError { .. }
            | SurveyError::ConfigValidationError { .. }
            | SurveyError::InvalidConfigValueError { .. }
            | SurveyError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SurveyError::SerializationError(_) => ErrorCategory::Data,
            SurveyError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Remote side may recover on a later run.
            SurveyError::ApiError(_) => ErrorSeverity::Medium,
            SurveyError::HttpStatusError { status, .. } if *status >= 500 => {
                ErrorSeverity::Medium
            }
            SurveyError::HttpStatusError { .. } => ErrorSeverity::High,
            SurveyError::SerializationError(_) => ErrorSeverity::High,
            SurveyError::ConfigError { .. }
            | SurveyError::ConfigValidationError { .. }
            | SurveyError::InvalidConfigValueError { .. }
            | SurveyError::MissingConfigError { .. } => ErrorSeverity::High,
            SurveyError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SurveyError::ApiError(_) => {
                "Check your network connection and try again".to_string()
            }
            SurveyError::HttpStatusError { status: 401 | 403, .. } => {
                "Check the API token (SUPER_JOB_TOKEN or --superjob-token)".to_string()
            }
            SurveyError::HttpStatusError { status, .. } if *status >= 500 => {
                "The job board is having trouble, retry later".to_string()
            }
            SurveyError::HttpStatusError { .. } => {
                "Check the endpoint URL and query settings".to_string()
            }
            SurveyError::IoError(_) => "Check file paths and permissions".to_string(),
            SurveyError::SerializationError(_) => {
                "The API returned an unexpected payload; check the endpoint".to_string()
            }
            SurveyError::ConfigError { .. } | SurveyError::ConfigValidationError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            SurveyError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            SurveyError::MissingConfigError { field } => {
                format!("Set '{}' on the command line or in the config file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch vacancies: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Could not read API response: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
