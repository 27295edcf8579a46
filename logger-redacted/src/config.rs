// Logger configuration
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    pub redaction_enabled: bool,
    /// Replace secrets with a short hash instead of a fixed mask
    pub hash_for_correlation: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            redaction_enabled: true,
            hash_for_correlation: false,
        }
    }
}

impl LoggerConfig {
    pub fn verbose(mut self) -> Self {
        self.level = "debug".to_string();
        self
    }
}
