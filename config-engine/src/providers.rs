// Configuration providers: each yields a partial document merged over the defaults
use crate::error::{ConfigError, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "ACTIONS_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "ACTIONS_LOG_JSON";
pub const ENV_LOG_REDACTION: &str = "ACTIONS_LOG_REDACTION";
pub const ENV_OUTPUT_FORMAT: &str = "ACTIONS_OUTPUT_FORMAT";

pub trait ConfigProvider {
    fn load(&self) -> Result<Value>;
}

/// YAML or JSON file, chosen by extension.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigProvider for FileProvider {
    fn load(&self) -> Result<Value> {
        let display = self.path.display().to_string();
        if !self.path.exists() {
            return Err(ConfigError::SourceNotFound(display));
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::ReadError {
            path: display.clone(),
            source,
        })?;

        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let value = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str::<Value>(&raw)?,
            Some("json") => serde_json::from_str::<Value>(&raw)?,
            _ => return Err(ConfigError::UnsupportedFormat(display)),
        };

        // an empty YAML file parses as null
        Ok(if value.is_null() { Value::Object(Map::new()) } else { value })
    }
}

/// Environment overrides.
///
/// The lookup is injectable so tests do not have to touch the process
/// environment.
pub struct EnvProvider<F = fn(&str) -> Option<String>> {
    lookup: F,
}

impl EnvProvider {
    pub fn from_process() -> Self {
        Self {
            lookup: process_var,
        }
    }
}

fn process_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl<F> EnvProvider<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    fn bool_var(&self, key: &str) -> Result<Option<bool>> {
        match (self.lookup)(key) {
            None => Ok(None),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Some(true)),
                "0" | "false" | "no" | "off" => Ok(Some(false)),
                _ => Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: raw,
                }),
            },
        }
    }
}

impl<F> ConfigProvider for EnvProvider<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn load(&self) -> Result<Value> {
        let mut logging = Map::new();
        if let Some(level) = (self.lookup)(ENV_LOG_LEVEL) {
            logging.insert("level".to_string(), Value::String(level));
        }
        if let Some(json) = self.bool_var(ENV_LOG_JSON)? {
            logging.insert("json".to_string(), Value::Bool(json));
        }
        if let Some(redaction) = self.bool_var(ENV_LOG_REDACTION)? {
            logging.insert("redaction_enabled".to_string(), Value::Bool(redaction));
        }

        let mut root = Map::new();
        if !logging.is_empty() {
            root.insert("logging".to_string(), Value::Object(logging));
        }
        if let Some(format) = (self.lookup)(ENV_OUTPUT_FORMAT) {
            root.insert(
                "default_format".to_string(),
                Value::String(format.trim().to_ascii_lowercase()),
            );
        }

        Ok(Value::Object(root))
    }
}

/// Deep-merge `overlay` into `base`; objects merge key by key, anything else replaces.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_merge_nested_objects() {
        let mut base = json!({ "logging": { "level": "info", "json": false }, "default_format": "text" });
        merge(&mut base, json!({ "logging": { "json": true } }));
        assert_eq!(
            base,
            json!({ "logging": { "level": "info", "json": true }, "default_format": "text" })
        );
    }

    #[test]
    fn test_env_provider_reads_known_variables() {
        let vars: HashMap<&str, &str> = [
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_JSON, "yes"),
            (ENV_OUTPUT_FORMAT, "JSON"),
        ]
        .into_iter()
        .collect();
        let provider = EnvProvider::with_lookup(|key: &str| vars.get(key).map(|v| v.to_string()));

        let value = provider.load().unwrap();
        assert_eq!(
            value,
            json!({ "logging": { "level": "debug", "json": true }, "default_format": "json" })
        );
    }

    #[test]
    fn test_env_provider_rejects_bad_bool() {
        let provider = EnvProvider::with_lookup(|key: &str| {
            (key == ENV_LOG_REDACTION).then(|| "sometimes".to_string())
        });
        assert!(matches!(provider.load(), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_file_provider_missing_file() {
        let provider = FileProvider::new("/definitely/not/here.yaml");
        assert!(matches!(provider.load(), Err(ConfigError::SourceNotFound(_))));
    }
}
