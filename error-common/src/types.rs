use crate::codes;
use thiserror::Error;

/// Error enum shared by the engine crates and the CLI
#[derive(Error, Debug)]
pub enum ActionsError {
    /// Input file or stream could not be read
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input document is not a well-formed action configuration
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration loading or merging failed; `code` names the cause
    #[error("Configuration error: {message}")]
    Config { code: &'static str, message: String },

    /// Logging subsystem could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ActionsError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(code: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
        }
    }

    /// Stable code reported alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => codes::configuration::FILE_UNREADABLE,
            Self::Parse(_) => codes::validation::INVALID_INPUT,
            Self::Config { code, .. } => *code,
            Self::Logging(_) => codes::system::LOGGING_INIT_FAILED,
            Self::Other(_) => codes::system::INTERNAL,
        }
    }
}

impl From<serde_json::Error> for ActionsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for ActionsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ActionsError>;

/// Log an error with its code under the given context
pub fn log_error(context: &str, error: &ActionsError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "Actions engine error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_json() {
        let err: ActionsError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ActionsError::Parse(_)));
        assert_eq!(err.code(), codes::validation::INVALID_INPUT);
    }

    #[test]
    fn test_config_error_keeps_its_code() {
        let err = ActionsError::config(codes::configuration::UNKNOWN_MESSAGE_KEY, "bad key");
        assert_eq!(err.code(), codes::configuration::UNKNOWN_MESSAGE_KEY);
        assert_eq!(err.to_string(), "Configuration error: bad key");
    }

    #[test]
    fn test_wrapped_error_is_internal() {
        let err: ActionsError = anyhow::anyhow!("stdout closed").into();
        assert_eq!(err.code(), codes::system::INTERNAL);
        assert_eq!(err.to_string(), "stdout closed");
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ActionsError::io(
            "action.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("action.json"));
        assert_eq!(err.code(), codes::configuration::FILE_UNREADABLE);
    }
}
