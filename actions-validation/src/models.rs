use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Credential scheme used when invoking an action endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthenticationType {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "BASIC")]
    Basic,
    #[serde(rename = "BEARER")]
    Bearer,
    #[serde(rename = "API_KEY")]
    ApiKey,
    /// Any value the console does not know about. Present, but never
    /// triggers authentication property checks.
    #[serde(other, rename = "UNRECOGNIZED")]
    Unrecognized,
}

impl AuthenticationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Basic => "BASIC",
            Self::Bearer => "BEARER",
            Self::ApiKey => "API_KEY",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for AuthenticationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown authentication type `{0}` (expected NONE, BASIC, BEARER or API_KEY)")]
pub struct ParseAuthenticationTypeError(pub String);

impl FromStr for AuthenticationType {
    type Err = ParseAuthenticationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "NONE" => Ok(Self::None),
            "BASIC" => Ok(Self::Basic),
            "BEARER" => Ok(Self::Bearer),
            "API_KEY" | "APIKEY" => Ok(Self::ApiKey),
            _ => Err(ParseAuthenticationTypeError(s.to_string())),
        }
    }
}

/// Candidate action configuration as submitted by the console form.
///
/// Every field is optional; an absent value and an empty string are treated
/// the same way by the validator.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_uri: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_authentication_type"
    )]
    pub authentication_type: Option<AuthenticationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_auth_property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_auth_property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_auth_property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_auth_property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_auth_property: Option<String>,
}

impl ActionConfig {
    pub fn new(name: impl Into<String>, endpoint_uri: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            endpoint_uri: Some(endpoint_uri.into()),
            ..Default::default()
        }
    }

    pub fn with_authentication(mut self, authentication_type: AuthenticationType) -> Self {
        self.authentication_type = Some(authentication_type);
        self
    }

    pub fn with_basic(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.authentication_type = Some(AuthenticationType::Basic);
        self.username_auth_property = Some(username.into());
        self.password_auth_property = Some(password.into());
        self
    }

    pub fn with_bearer(mut self, access_token: impl Into<String>) -> Self {
        self.authentication_type = Some(AuthenticationType::Bearer);
        self.access_token_auth_property = Some(access_token.into());
        self
    }

    pub fn with_api_key(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.authentication_type = Some(AuthenticationType::ApiKey);
        self.header_auth_property = Some(header.into());
        self.value_auth_property = Some(value.into());
        self
    }
}

/// A cleared selection (`""`) is the same as no selection.
fn deserialize_authentication_type<'de, D>(
    deserializer: D,
) -> Result<Option<AuthenticationType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StrDeserializer<'_, D::Error> = value.into_deserializer();
            AuthenticationType::deserialize(value).map(Some)
        }
    }
}

/// Secret-bearing properties are masked so a config can be logged safely.
impl fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionConfig")
            .field("name", &self.name)
            .field("endpoint_uri", &self.endpoint_uri)
            .field("authentication_type", &self.authentication_type)
            .field("username_auth_property", &self.username_auth_property)
            .field("password_auth_property", &mask(&self.password_auth_property))
            .field("access_token_auth_property", &mask(&self.access_token_auth_property))
            .field("header_auth_property", &self.header_auth_property)
            .field("value_auth_property", &mask(&self.value_auth_property))
            .finish()
    }
}

fn mask(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "***")
}

/// Form state flags that decide which authentication properties are required
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    pub is_create_form_state: bool,
    pub is_authentication_update_form_state: bool,
    pub authentication_type: Option<AuthenticationType>,
}

impl ValidationOptions {
    /// Options for a brand-new action: every credential is required.
    pub fn for_create(authentication_type: Option<AuthenticationType>) -> Self {
        Self {
            is_create_form_state: true,
            is_authentication_update_form_state: false,
            authentication_type,
        }
    }

    /// Options for editing an existing action.
    pub fn for_edit(
        authentication_type: Option<AuthenticationType>,
        is_authentication_update_form_state: bool,
    ) -> Self {
        Self {
            is_create_form_state: false,
            is_authentication_update_form_state,
            authentication_type,
        }
    }

    pub(crate) fn credentials_required(&self) -> bool {
        self.is_create_form_state || self.is_authentication_update_form_state
    }
}

/// Absent and empty are the same thing to the form.
pub(crate) fn is_empty(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_record() {
        let config: ActionConfig = serde_json::from_str(
            r#"{
                "name": "pre-issue",
                "endpointUri": "https://hooks.example.com/token",
                "authenticationType": "API_KEY",
                "headerAuthProperty": "X-API-Key",
                "valueAuthProperty": "abc"
            }"#,
        )
        .unwrap_or_default();

        assert_eq!(config.name.as_deref(), Some("pre-issue"));
        assert_eq!(config.authentication_type, Some(AuthenticationType::ApiKey));
        assert_eq!(config.header_auth_property.as_deref(), Some("X-API-Key"));
        assert!(config.password_auth_property.is_none());
    }

    #[test]
    fn test_unknown_authentication_type_is_unrecognized() {
        let config: ActionConfig =
            serde_json::from_str(r#"{ "authenticationType": "CLIENT_CREDENTIAL" }"#)
                .unwrap_or_default();
        assert_eq!(config.authentication_type, Some(AuthenticationType::Unrecognized));
    }

    #[test]
    fn test_empty_authentication_type_is_absent() {
        for raw in [r#"{ "authenticationType": "" }"#, r#"{ "authenticationType": "  " }"#] {
            let config: ActionConfig = serde_json::from_str(raw).unwrap();
            assert_eq!(config.authentication_type, None, "{raw}");
        }
        let config: ActionConfig =
            serde_json::from_str(r#"{ "authenticationType": null }"#).unwrap();
        assert_eq!(config.authentication_type, None);
    }

    #[test]
    fn test_authentication_type_from_str() {
        assert_eq!("basic".parse::<AuthenticationType>(), Ok(AuthenticationType::Basic));
        assert_eq!("api-key".parse::<AuthenticationType>(), Ok(AuthenticationType::ApiKey));
        assert_eq!("BEARER".parse::<AuthenticationType>(), Ok(AuthenticationType::Bearer));
        assert!("digest".parse::<AuthenticationType>().is_err());
    }

    #[test]
    fn test_debug_masks_secrets() {
        let config = ActionConfig::new("a", "https://x.example").with_basic("admin", "hunter2");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_is_empty_treats_none_and_blank_alike() {
        assert!(is_empty(&None));
        assert!(is_empty(&Some(String::new())));
        assert!(!is_empty(&Some(" ".to_string())));
    }

    #[test]
    fn test_option_constructors() {
        assert!(ValidationOptions::for_create(None).credentials_required());
        assert!(!ValidationOptions::for_edit(None, false).credentials_required());
        assert!(ValidationOptions::for_edit(None, true).credentials_required());
    }
}
