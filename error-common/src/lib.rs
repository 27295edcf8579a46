//! Common error handling utilities for the Actions Console Engine
//!
//! Provides the shared [`ActionsError`] type, the crate-wide [`Result`]
//! alias, and the standardized string codes reported next to validation
//! violations and infrastructure failures.
//!
//! Field-level validation failures are *not* errors: the validator reports
//! them in its error map. The types here cover the I/O, parsing,
//! configuration, and logging failures around it.
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, ActionsError};
//!
//! let err = ActionsError::config(
//!     codes::configuration::UNKNOWN_MESSAGE_KEY,
//!     "Unknown message key in overrides: actions:fields.nope",
//! );
//! assert_eq!(err.code(), codes::configuration::UNKNOWN_MESSAGE_KEY);
//! ```

pub mod types;
pub mod codes;

pub use types::*;
