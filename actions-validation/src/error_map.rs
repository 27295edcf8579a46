use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Fields of the action form that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionField {
    Name,
    EndpointUri,
    AuthenticationType,
    UsernameAuthProperty,
    PasswordAuthProperty,
    AccessTokenAuthProperty,
    HeaderAuthProperty,
    ValueAuthProperty,
}

impl ActionField {
    pub const ALL: [ActionField; 8] = [
        Self::Name,
        Self::EndpointUri,
        Self::AuthenticationType,
        Self::UsernameAuthProperty,
        Self::PasswordAuthProperty,
        Self::AccessTokenAuthProperty,
        Self::HeaderAuthProperty,
        Self::ValueAuthProperty,
    ];

    /// Form field name as the console knows it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::EndpointUri => "endpointUri",
            Self::AuthenticationType => "authenticationType",
            Self::UsernameAuthProperty => "usernameAuthProperty",
            Self::PasswordAuthProperty => "passwordAuthProperty",
            Self::AccessTokenAuthProperty => "accessTokenAuthProperty",
            Self::HeaderAuthProperty => "headerAuthProperty",
            Self::ValueAuthProperty => "valueAuthProperty",
        }
    }
}

impl fmt::Display for ActionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to display message, holding only the invalid fields.
///
/// An empty map means the record can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<ActionField, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: ActionField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: ActionField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ActionField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ActionField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<ActionField, String> {
        self.0
    }
}

impl IntoIterator for ErrorMap {
    type Item = (ActionField, String);
    type IntoIter = btree_map::IntoIter<ActionField, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(ActionField, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (ActionField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
