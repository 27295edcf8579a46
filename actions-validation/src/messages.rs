//! Message keys and message resolution for validation errors.
//!
//! The validator never produces display text itself. It hands a message key
//! (plus interpolation parameters) to a [`MessageResolver`] supplied by the
//! host, which is where localization plugs in. [`MessageCatalog::english`]
//! is the built-in fallback.

use serde::Serialize;
use std::collections::HashMap;

pub mod keys {
    pub const NAME_EMPTY: &str = "actions:fields.name.validations.empty";
    pub const NAME_INVALID: &str = "actions:fields.name.validations.invalid";
    pub const ENDPOINT_EMPTY: &str = "actions:fields.endpoint.validations.empty";
    pub const ENDPOINT_NOT_HTTPS: &str = "actions:fields.endpoint.validations.notHttps";
    pub const ENDPOINT_INVALID_URL: &str = "actions:fields.endpoint.validations.invalidUrl";
    pub const AUTHENTICATION_TYPE_EMPTY: &str =
        "actions:fields.authenticationType.validations.empty";
    pub const BASIC_USERNAME_EMPTY: &str =
        "actions:fields.authentication.types.basic.properties.username.validations.empty";
    pub const BASIC_PASSWORD_EMPTY: &str =
        "actions:fields.authentication.types.basic.properties.password.validations.empty";
    pub const BEARER_ACCESS_TOKEN_EMPTY: &str =
        "actions:fields.authentication.types.bearer.properties.accessToken.validations.empty";
    pub const API_KEY_HEADER_EMPTY: &str =
        "actions:fields.authentication.types.apiKey.properties.header.validations.empty";
    pub const API_KEY_HEADER_INVALID: &str =
        "actions:fields.authentication.types.apiKey.properties.header.validations.invalid";
    pub const API_KEY_VALUE_EMPTY: &str =
        "actions:fields.authentication.types.apiKey.properties.value.validations.empty";

    pub const ALL: [&str; 12] = [
        NAME_EMPTY,
        NAME_INVALID,
        ENDPOINT_EMPTY,
        ENDPOINT_NOT_HTTPS,
        ENDPOINT_INVALID_URL,
        AUTHENTICATION_TYPE_EMPTY,
        BASIC_USERNAME_EMPTY,
        BASIC_PASSWORD_EMPTY,
        BEARER_ACCESS_TOKEN_EMPTY,
        API_KEY_HEADER_EMPTY,
        API_KEY_HEADER_INVALID,
        API_KEY_VALUE_EMPTY,
    ];

    pub fn is_known(key: &str) -> bool {
        ALL.contains(&key)
    }
}

/// Maps a message key and interpolation parameters to display text.
pub trait MessageResolver: Send + Sync {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String;
}

impl<F> MessageResolver for F
where
    F: Fn(&str, &[(&str, &str)]) -> String + Send + Sync,
{
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        self(key, params)
    }
}

/// Key-to-template table with `{{param}}` interpolation.
///
/// Unknown keys resolve to the key itself so a missing translation is
/// visible rather than silently blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in en-US messages for every validation key.
    pub fn english() -> Self {
        let entries = [
            (keys::NAME_EMPTY, "Action name is required."),
            (
                keys::NAME_INVALID,
                "Please enter a valid name. Only letters, digits, spaces, hyphens (-) and \
                 underscores (_) are allowed, up to 255 characters.",
            ),
            (keys::ENDPOINT_EMPTY, "Endpoint is required."),
            (keys::ENDPOINT_NOT_HTTPS, "The entered URL is not a HTTPS URL."),
            (keys::ENDPOINT_INVALID_URL, "The entered URL is invalid."),
            (keys::AUTHENTICATION_TYPE_EMPTY, "Authentication type is required."),
            (keys::BASIC_USERNAME_EMPTY, "Username is required."),
            (keys::BASIC_PASSWORD_EMPTY, "Password is required."),
            (keys::BEARER_ACCESS_TOKEN_EMPTY, "Access token is required."),
            (keys::API_KEY_HEADER_EMPTY, "Header is required."),
            (
                keys::API_KEY_HEADER_INVALID,
                "Please choose a valid header name that starts with a letter or digit and \
                 contains only letters, digits, hyphens (-) and periods (.).",
            ),
            (keys::API_KEY_VALUE_EMPTY, "Value is required."),
        ];

        entries.into_iter().collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Replace templates for the given keys, keeping the rest.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, template) in overrides {
            self.insert(key, template);
        }
        self
    }

    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Entries sorted by key.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .templates
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }
}

impl<K, V> FromIterator<(K, V)> for MessageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new().with_overrides(iter)
    }
}

impl MessageResolver for MessageCatalog {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        let Some(template) = self.templates.get(key) else {
            return key.to_string();
        };
        interpolate(template, params)
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{name}}}}}"), value)
    })
}
