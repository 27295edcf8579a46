//! Layered configuration for the Actions Console Engine
//!
//! Configuration is assembled from an ordered list of providers, each
//! producing a partial document that is deep-merged over the defaults:
//!
//! 1. built-in defaults
//! 2. an optional YAML (`.yaml`/`.yml`) or JSON (`.json`) file
//! 3. environment variables (`ACTIONS_LOG_LEVEL`, `ACTIONS_LOG_JSON`,
//!    `ACTIONS_LOG_REDACTION`, `ACTIONS_OUTPUT_FORMAT`)
//!
//! The merged result is checked before it is returned: message overrides
//! must name keys the validator actually emits.
//!
//! # Example
//!
//! ```yaml
//! logging:
//!   level: debug
//!   json: false
//!   redaction_enabled: true
//! default_format: json
//! messages:
//!   "actions:fields.name.validations.empty": "Give the action a name."
//! ```
//!
//! ```rust,no_run
//! use config_engine::EngineConfig;
//! use std::path::Path;
//!
//! let config = EngineConfig::load(Some(Path::new("actions.yaml")))?;
//! let catalog = config.message_catalog();
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod engine;
pub mod providers;
pub mod validation;
pub mod error;

pub use engine::*;
pub use providers::*;
pub use error::*;
