// Reading action configurations from files or stdin
use actions_validation::ActionConfig;
use error_common::{ActionsError, Result};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// `.yaml`/`.yml` are YAML; everything else, stdin included, is JSON.
    pub fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

pub fn parse_action_config(raw: &str, format: InputFormat) -> Result<ActionConfig> {
    let config = match format {
        InputFormat::Json => serde_json::from_str(raw)?,
        InputFormat::Yaml => serde_yaml::from_str(raw)?,
    };
    Ok(config)
}

/// Load an action configuration; `-` reads JSON from stdin.
pub fn read_action_config(path: &Path) -> Result<ActionConfig> {
    let display = path.display().to_string();

    if display == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| ActionsError::io("<stdin>", e))?;
        return parse_action_config(&raw, InputFormat::Json);
    }

    let raw = std::fs::read_to_string(path).map_err(|e| ActionsError::io(display, e))?;
    parse_action_config(&raw, InputFormat::for_path(path))
}
