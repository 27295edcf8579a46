//! Action configuration validation for the identity-provider console
//!
//! An *action* is an external HTTP endpoint the identity provider calls at
//! specific points of a flow (for example before issuing an access token).
//! This crate validates the action configuration form: the action name, the
//! endpoint URI and the credentials used to call that endpoint.
//!
//! # Rules
//!
//! - **name**: required, letters/digits/space/hyphen/underscore
//! - **endpointUri**: required, a valid absolute URL, `https` only
//! - **authenticationType**: required
//! - **BASIC**: username and password
//! - **BEARER**: access token
//! - **API_KEY**: header (valid header name) and value
//!
//! Credentials are only demanded when the form is creating an action, when
//! the user is updating the authentication section, or (for BASIC and
//! API_KEY) when one of the two properties has already been filled in.
//!
//! # Example
//!
//! ```rust
//! use actions_validation::{
//!     validate_action_common_fields, ActionConfig, ActionField, AuthenticationType,
//!     MessageCatalog, ValidationOptions,
//! };
//!
//! let config = ActionConfig::new("pre-issue-token", "http://hooks.example.com/token")
//!     .with_authentication(AuthenticationType::Bearer);
//! let options = ValidationOptions::for_create(Some(AuthenticationType::Bearer));
//!
//! let errors = validate_action_common_fields(&config, &options, &MessageCatalog::english());
//!
//! assert_eq!(errors.get(ActionField::EndpointUri), Some("The entered URL is not a HTTPS URL."));
//! assert!(errors.contains(ActionField::AccessTokenAuthProperty));
//! ```

pub mod constants;
pub mod error_map;
pub mod messages;
pub mod models;
pub mod url_utils;
pub mod validator;

pub use error_map::*;
pub use messages::{keys, MessageCatalog, MessageResolver};
pub use models::*;
pub use validator::*;
