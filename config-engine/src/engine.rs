use crate::error::{ConfigError, Result};
use crate::providers::{merge, ConfigProvider, EnvProvider, FileProvider};
use crate::validation;
use actions_validation::MessageCatalog;
use logger_redacted::LoggerConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How validation results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "default_format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub logging: LoggerConfig,
    /// Message key to template, merged over the built-in English catalog
    pub messages: HashMap<String, String>,
    pub default_format: OutputFormat,
}

impl EngineConfig {
    /// Defaults, then `path` (if any), then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = path {
            loader = loader.add_source(FileProvider::new(path));
        }
        loader.add_source(EnvProvider::from_process()).build()
    }

    /// English catalog with this configuration's overrides applied.
    pub fn message_catalog(&self) -> MessageCatalog {
        MessageCatalog::english().with_overrides(self.messages.clone())
    }
}

/// Applies providers in order over the default configuration
#[derive(Default)]
pub struct ConfigLoader {
    sources: Vec<Box<dyn ConfigProvider>>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(mut self, provider: impl ConfigProvider + 'static) -> Self {
        self.sources.push(Box::new(provider));
        self
    }

    pub fn build(self) -> Result<EngineConfig> {
        let mut merged = serde_json::to_value(EngineConfig::default())?;
        for source in &self.sources {
            merge(&mut merged, source.load()?);
        }

        let config: EngineConfig = serde_json::from_value(merged)?;
        validation::validate(&config)?;

        tracing::debug!(
            sources = self.sources.len(),
            message_overrides = config.messages.len(),
            format = %config.default_format,
            "Configuration loaded"
        );

        Ok(config)
    }
}
