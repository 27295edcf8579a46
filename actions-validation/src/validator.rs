//! Field validation for the action configuration form.
//!
//! Validation runs in two pure stages. [`evaluate`] applies the field rules
//! and records a [`Violation`] per invalid field; [`resolve`] turns those
//! violations into display messages through a [`MessageResolver`].
//! [`validate_action_common_fields`] composes the two.
//!
//! Rules run in a fixed order and a later rule replaces an earlier message
//! for the same field. Pattern rules only run on a value that is present, so
//! an absent name reports the "required" message while an explicitly empty
//! name reports the pattern message. The API key header behaves the same way.

use crate::constants::{ACTION_NAME_REGEX, API_HEADER_REGEX};
use crate::error_map::{ActionField, ErrorMap};
use crate::messages::{keys, MessageResolver};
use crate::models::{is_empty, ActionConfig, AuthenticationType, ValidationOptions};
use crate::url_utils::{is_https_url, is_url_valid};
use error_common::codes;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Category of a failed field rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    InvalidFormat,
    InsecureTransport,
}

impl ViolationKind {
    /// Standardized error code for the violation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => codes::validation::MISSING_REQUIRED_FIELD,
            Self::InvalidFormat => codes::validation::INVALID_FORMAT,
            Self::InsecureTransport => codes::validation::INSECURE_TRANSPORT,
        }
    }
}

/// A failed rule before its message is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message_key: &'static str,
}

impl Violation {
    pub fn new(kind: ViolationKind, message_key: &'static str) -> Self {
        Self { kind, message_key }
    }
}

pub type Violations = BTreeMap<ActionField, Violation>;

/// Record a violation for `$field` when `$predicate` holds
macro_rules! flag_field {
    ($violations:expr, $field:expr, $predicate:expr, $kind:expr, $key:expr) => {
        if $predicate {
            $violations.insert($field, Violation::new($kind, $key));
        }
    };
}

/// Apply every field rule to `values`.
pub fn evaluate(values: &ActionConfig, options: &ValidationOptions) -> Violations {
    let mut violations = Violations::new();

    flag_field!(
        violations,
        ActionField::Name,
        is_empty(&values.name),
        ViolationKind::Required,
        keys::NAME_EMPTY
    );
    if let Some(name) = values.name.as_deref() {
        flag_field!(
            violations,
            ActionField::Name,
            !ACTION_NAME_REGEX.is_match(name),
            ViolationKind::InvalidFormat,
            keys::NAME_INVALID
        );
    }

    match values.endpoint_uri.as_deref().filter(|uri| !uri.is_empty()) {
        None => {
            violations.insert(
                ActionField::EndpointUri,
                Violation::new(ViolationKind::Required, keys::ENDPOINT_EMPTY),
            );
        }
        Some(uri) if is_url_valid(uri) => {
            flag_field!(
                violations,
                ActionField::EndpointUri,
                !is_https_url(uri),
                ViolationKind::InsecureTransport,
                keys::ENDPOINT_NOT_HTTPS
            );
        }
        Some(_) => {
            violations.insert(
                ActionField::EndpointUri,
                Violation::new(ViolationKind::InvalidFormat, keys::ENDPOINT_INVALID_URL),
            );
        }
    }

    flag_field!(
        violations,
        ActionField::AuthenticationType,
        values.authentication_type.is_none(),
        ViolationKind::Required,
        keys::AUTHENTICATION_TYPE_EMPTY
    );

    match options.authentication_type {
        Some(AuthenticationType::Basic) => {
            let touched = !is_empty(&values.username_auth_property)
                || !is_empty(&values.password_auth_property);
            if options.credentials_required() || touched {
                flag_field!(
                    violations,
                    ActionField::UsernameAuthProperty,
                    is_empty(&values.username_auth_property),
                    ViolationKind::Required,
                    keys::BASIC_USERNAME_EMPTY
                );
                flag_field!(
                    violations,
                    ActionField::PasswordAuthProperty,
                    is_empty(&values.password_auth_property),
                    ViolationKind::Required,
                    keys::BASIC_PASSWORD_EMPTY
                );
            }
        }
        Some(AuthenticationType::Bearer) => {
            if options.credentials_required() {
                flag_field!(
                    violations,
                    ActionField::AccessTokenAuthProperty,
                    is_empty(&values.access_token_auth_property),
                    ViolationKind::Required,
                    keys::BEARER_ACCESS_TOKEN_EMPTY
                );
            }
        }
        Some(AuthenticationType::ApiKey) => {
            let touched = !is_empty(&values.header_auth_property)
                || !is_empty(&values.value_auth_property);
            if options.credentials_required() || touched {
                flag_field!(
                    violations,
                    ActionField::HeaderAuthProperty,
                    is_empty(&values.header_auth_property),
                    ViolationKind::Required,
                    keys::API_KEY_HEADER_EMPTY
                );
                if let Some(header) = values.header_auth_property.as_deref() {
                    flag_field!(
                        violations,
                        ActionField::HeaderAuthProperty,
                        !API_HEADER_REGEX.is_match(header),
                        ViolationKind::InvalidFormat,
                        keys::API_KEY_HEADER_INVALID
                    );
                }
                flag_field!(
                    violations,
                    ActionField::ValueAuthProperty,
                    is_empty(&values.value_auth_property),
                    ViolationKind::Required,
                    keys::API_KEY_VALUE_EMPTY
                );
            }
        }
        Some(AuthenticationType::None | AuthenticationType::Unrecognized) | None => {}
    }

    violations
}

/// Turn violations into display messages.
pub fn resolve<R>(violations: &Violations, resolver: &R) -> ErrorMap
where
    R: MessageResolver + ?Sized,
{
    violations
        .iter()
        .map(|(field, violation)| (*field, resolver.resolve(violation.message_key, &[])))
        .collect()
}

/// Validate the common action form fields.
///
/// Never fails; invalid fields are reported in the returned map.
pub fn validate_action_common_fields<R>(
    values: &ActionConfig,
    options: &ValidationOptions,
    resolver: &R,
) -> ErrorMap
where
    R: MessageResolver + ?Sized,
{
    resolve(&evaluate(values, options), resolver)
}

/// Full outcome of one validation: rule violations and their messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Violations,
    pub errors: ErrorMap,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn code(&self, field: ActionField) -> Option<&'static str> {
        self.violations.get(&field).map(|v| v.kind.code())
    }
}

/// Validator bound to a shared message resolver.
///
/// Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct ActionConfigValidator {
    resolver: Arc<dyn MessageResolver>,
}

impl ActionConfigValidator {
    pub fn new(resolver: Arc<dyn MessageResolver>) -> Self {
        Self { resolver }
    }

    pub fn validate(&self, values: &ActionConfig, options: &ValidationOptions) -> ErrorMap {
        self.report(values, options).errors
    }

    pub fn report(&self, values: &ActionConfig, options: &ValidationOptions) -> ValidationReport {
        let violations = evaluate(values, options);
        let errors = resolve(&violations, self.resolver.as_ref());

        tracing::debug!(
            create = options.is_create_form_state,
            authentication_update = options.is_authentication_update_form_state,
            authentication_type = ?options.authentication_type,
            invalid_fields = ?errors.fields().map(|f| f.as_str()).collect::<Vec<_>>(),
            "Validated action configuration"
        );

        ValidationReport { violations, errors }
    }
}

impl Default for ActionConfigValidator {
    fn default() -> Self {
        Self::new(Arc::new(crate::messages::MessageCatalog::english()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_resolver(key: &str, _params: &[(&str, &str)]) -> String {
        key.to_string()
    }

    fn valid_config() -> ActionConfig {
        ActionConfig::new("valid-name", "https://hooks.example.com/action")
            .with_authentication(AuthenticationType::None)
    }

    #[test]
    fn test_valid_config_has_no_errors() {
        let errors = validate_action_common_fields(
            &valid_config(),
            &ValidationOptions::for_create(Some(AuthenticationType::None)),
            &key_resolver,
        );
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_empty_name_reports_pattern_message() {
        let mut config = valid_config();
        config.name = Some(String::new());
        let violations = evaluate(&config, &ValidationOptions::default());
        assert_eq!(
            violations.get(&ActionField::Name),
            Some(&Violation::new(ViolationKind::InvalidFormat, keys::NAME_INVALID))
        );
    }

    #[test]
    fn test_absent_name_and_header_report_required() {
        let mut config = valid_config().with_authentication(AuthenticationType::ApiKey);
        config.name = None;
        config.value_auth_property = Some("v".to_string());

        let violations = evaluate(
            &config,
            &ValidationOptions::for_create(Some(AuthenticationType::ApiKey)),
        );
        assert_eq!(
            violations.get(&ActionField::Name),
            Some(&Violation::new(ViolationKind::Required, keys::NAME_EMPTY))
        );
        assert_eq!(
            violations.get(&ActionField::HeaderAuthProperty),
            Some(&Violation::new(ViolationKind::Required, keys::API_KEY_HEADER_EMPTY))
        );
        assert!(!violations.contains_key(&ActionField::ValueAuthProperty));
    }

    #[test]
    fn test_empty_endpoint_reports_required() {
        for endpoint in [None, Some(String::new())] {
            let mut config = valid_config();
            config.endpoint_uri = endpoint;
            let violations = evaluate(&config, &ValidationOptions::default());
            assert_eq!(
                violations.get(&ActionField::EndpointUri),
                Some(&Violation::new(ViolationKind::Required, keys::ENDPOINT_EMPTY))
            );
        }
    }

    #[test]
    fn test_branch_follows_options_not_record() {
        let config = valid_config().with_authentication(AuthenticationType::Basic);
        let violations = evaluate(&config, &ValidationOptions::for_create(None));
        assert!(!violations.contains_key(&ActionField::UsernameAuthProperty));
    }

    #[test]
    fn test_violation_codes() {
        assert_eq!(ViolationKind::Required.code(), codes::validation::MISSING_REQUIRED_FIELD);
        assert_eq!(ViolationKind::InvalidFormat.code(), codes::validation::INVALID_FORMAT);
        assert_eq!(
            ViolationKind::InsecureTransport.code(),
            codes::validation::INSECURE_TRANSPORT
        );
    }

    #[test]
    fn test_report_exposes_codes() {
        let validator = ActionConfigValidator::default();
        let config = ActionConfig::new("ok", "http://insecure.example.com")
            .with_authentication(AuthenticationType::None);
        let report = validator.report(&config, &ValidationOptions::default());
        assert!(!report.is_valid());
        assert_eq!(
            report.code(ActionField::EndpointUri),
            Some(codes::validation::INSECURE_TRANSPORT)
        );
        assert_eq!(
            report.errors.get(ActionField::EndpointUri),
            Some("The entered URL is not a HTTPS URL.")
        );
    }
}
