//! Command-line tooling for identity-provider action configurations
//!
//! The `actions` binary validates action configuration documents the same
//! way the console form does, so configurations kept in version control or
//! produced by provisioning scripts can be checked before they are applied.
//!
//! # Example Usage
//!
//! ```bash
//! # Validate a new action
//! actions validate pre-issue-token.yaml --create
//!
//! # Validate an edit that changes the credentials, JSON output
//! actions validate hook.json --auth-update --auth-type api-key --format json
//!
//! # Pipe a record in
//! cat hook.json | actions validate -
//!
//! # Show the active messages (built-in catalog plus configured overrides)
//! actions --config actions.yaml messages
//! ```
//!
//! Exit status is 0 when the configuration is valid, 1 when it has invalid
//! fields and 2 when it could not be read or the tool is misconfigured.

pub mod cli;
pub mod commands;
pub mod input;
pub mod output;

pub use cli::*;
