// Checks applied to the merged configuration
use crate::engine::EngineConfig;
use crate::error::{ConfigError, Result};
use actions_validation::keys;

/// Reject message overrides for keys the validator never emits.
pub fn validate(config: &EngineConfig) -> Result<()> {
    // sorted so the reported key is deterministic
    let mut override_keys: Vec<&String> = config.messages.keys().collect();
    override_keys.sort();

    if let Some(unknown) = override_keys.into_iter().find(|key| !keys::is_known(key)) {
        return Err(ConfigError::UnknownMessageKey(unknown.clone()));
    }

    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "logging.level".to_string(),
            value: config.logging.level.clone(),
        });
    }

    Ok(())
}
