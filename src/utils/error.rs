use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Target type mismatch: expected {expected}, got {found}")]
    TargetTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Missing required field {model}.{field}")]
    MissingRequiredField {
        model: &'static str,
        field: &'static str,
    },

    #[error("Cannot parse {field} value {value:?} as ISO-8601: {reason}")]
    TemporalParseFailure {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid value for {model}.{field}: {reason}")]
    InvalidFieldValue {
        model: &'static str,
        field: String,
        reason: String,
    },

    #[error("No hydrator registered for model '{name}'")]
    UnknownHydrator { name: String },

    #[error("Missing request parameter: {param}")]
    MissingParam { param: &'static str },

    #[error("Unexpected API response ({status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

impl SdkError {
    /// 是否為資料轉換 (hydration) 階段的錯誤
    pub fn is_hydration_error(&self) -> bool {
        matches!(
            self,
            SdkError::TargetTypeMismatch { .. }
                | SdkError::MissingRequiredField { .. }
                | SdkError::TemporalParseFailure { .. }
                | SdkError::InvalidFieldValue { .. }
                | SdkError::UnknownHydrator { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SdkError>;
