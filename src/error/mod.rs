//! Error types for siteassist.

use thiserror::Error;

/// Primary error type for all siteassist operations.
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Invalid image: {0}")]
    InvalidImage(String),
}

impl AssistError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// True when the service answered but produced no usable text.
    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse)
    }
}

impl From<toml::de::Error> for AssistError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration(error.to_string())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AssistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_constructor_formats_status() {
        let err = AssistError::api(503, "backend unavailable");
        assert_eq!(err.to_string(), "API error (status 503): backend unavailable");
    }

    #[test]
    fn only_empty_response_reports_empty() {
        assert!(AssistError::EmptyResponse.is_empty_response());
        assert!(!AssistError::Authentication("nope".into()).is_empty_response());
        assert!(!AssistError::api(500, "boom").is_empty_response());
    }

    #[test]
    fn toml_errors_become_configuration_errors() {
        let parse_err = toml::from_str::<toml::Table>("api_key = ").unwrap_err();
        let err: AssistError = parse_err.into();
        assert!(matches!(err, AssistError::Configuration(_)));
    }
}
