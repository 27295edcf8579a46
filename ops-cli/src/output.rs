// Rendering validation reports and message catalogs
use actions_validation::{ActionField, MessageCatalog, ValidationReport};
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    valid: bool,
    errors: &'a actions_validation::ErrorMap,
    codes: BTreeMap<ActionField, &'static str>,
}

pub fn render_report_json(report: &ValidationReport) -> serde_json::Result<String> {
    let codes = report
        .violations
        .iter()
        .map(|(field, violation)| (*field, violation.kind.code()))
        .collect();

    serde_json::to_string_pretty(&JsonReport {
        valid: report.is_valid(),
        errors: &report.errors,
        codes,
    })
}

pub fn render_report_text(report: &ValidationReport, source: &str) -> String {
    if report.is_valid() {
        return format!("{} {}", "✔".bright_green(), format!("{source} is valid").green());
    }

    let mut lines = vec![format!(
        "{} {}",
        "✘".bright_red(),
        format!("{source}: {} invalid field(s)", report.errors.len()).red()
    )];
    for (field, message) in report.errors.iter() {
        let code = report.code(field).unwrap_or_default();
        lines.push(format!(
            "  {:<24} {} {}",
            field.as_str().bright_white(),
            format!("[{code}]").dimmed(),
            message
        ));
    }
    lines.join("\n")
}

pub fn render_messages_json(catalog: &MessageCatalog) -> serde_json::Result<String> {
    let entries: BTreeMap<&str, &str> = catalog.entries().into_iter().collect();
    serde_json::to_string_pretty(&entries)
}

pub fn render_messages_text(catalog: &MessageCatalog) -> String {
    catalog
        .entries()
        .into_iter()
        .map(|(key, template)| format!("{}\n  {}", key.bright_cyan(), template))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actions_validation::{ActionConfig, ActionConfigValidator, AuthenticationType, ValidationOptions};

    fn invalid_report() -> ValidationReport {
        let config = ActionConfig::new("hook", "http://example.com")
            .with_authentication(AuthenticationType::Bearer);
        ActionConfigValidator::default()
            .report(&config, &ValidationOptions::for_create(Some(AuthenticationType::Bearer)))
    }

    #[test]
    fn test_json_report_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&render_report_json(&invalid_report()).unwrap()).unwrap();

        assert_eq!(json["valid"], serde_json::json!(false));
        assert_eq!(json["errors"]["endpointUri"], "The entered URL is not a HTTPS URL.");
        assert_eq!(json["codes"]["endpointUri"], "VALIDATION_1004");
        assert_eq!(json["codes"]["accessTokenAuthProperty"], "VALIDATION_1002");
    }

    #[test]
    fn test_text_report_lists_fields() {
        colored::control::set_override(false);
        let text = render_report_text(&invalid_report(), "hook.json");
        assert!(text.contains("hook.json: 2 invalid field(s)"));
        assert!(text.contains("endpointUri"));
        assert!(text.contains("[VALIDATION_1002] Access token is required."));
    }

    #[test]
    fn test_messages_json_contains_every_key() {
        let json: serde_json::Value =
            serde_json::from_str(&render_messages_json(&MessageCatalog::english()).unwrap()).unwrap();
        for key in actions_validation::keys::ALL {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
