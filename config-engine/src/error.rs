use error_common::{codes, ActionsError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    SourceNotFound(String),

    #[error("Failed to read configuration file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parsing failed: {0}")]
    ParseError(String),

    #[error("Unsupported configuration file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Unknown message key in overrides: {0}")]
    UnknownMessageKey(String),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceNotFound(_) | Self::ReadError { .. } => {
                codes::configuration::FILE_UNREADABLE
            }
            Self::UnknownMessageKey(_) => codes::configuration::UNKNOWN_MESSAGE_KEY,
            Self::ParseError(_) | Self::UnsupportedFormat(_) | Self::InvalidValue { .. } => {
                codes::configuration::PARSE_FAILED
            }
        }
    }
}

impl From<ConfigError> for ActionsError {
    fn from(err: ConfigError) -> Self {
        ActionsError::config(err.code(), err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_survive_conversion() {
        let cases = [
            (
                ConfigError::UnknownMessageKey("actions:fields.nope".to_string()),
                codes::configuration::UNKNOWN_MESSAGE_KEY,
            ),
            (
                ConfigError::SourceNotFound("actions.yaml".to_string()),
                codes::configuration::FILE_UNREADABLE,
            ),
            (
                ConfigError::ParseError("expected value".to_string()),
                codes::configuration::PARSE_FAILED,
            ),
        ];

        for (err, code) in cases {
            let message = err.to_string();
            let converted = ActionsError::from(err);
            assert_eq!(converted.code(), code);
            assert!(converted.to_string().contains(&message));
        }
    }
}
