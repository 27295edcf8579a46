// Subcommand implementations
use crate::cli::{MessagesArgs, ValidateArgs};
use crate::input::read_action_config;
use crate::output;
use actions_validation::{ActionConfigValidator, ValidationOptions, ValidationReport};
use config_engine::{EngineConfig, OutputFormat};
use error_common::Result;
use logger_redacted::{redacted_debug, redacted_info};
use std::path::Path;
use std::sync::Arc;

/// Outcome of a command, mapped to the process exit status by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

/// Load the engine configuration named by `--config`, if any.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    Ok(EngineConfig::load(path)?)
}

pub fn validate(args: &ValidateArgs, config: &EngineConfig) -> Result<(Outcome, String)> {
    let values = read_action_config(&args.file)?;
    redacted_debug!("Loaded action configuration {:?}", values);

    let options = ValidationOptions {
        is_create_form_state: args.create,
        is_authentication_update_form_state: args.auth_update,
        authentication_type: args.auth_type.or(values.authentication_type),
    };

    let validator = ActionConfigValidator::new(Arc::new(config.message_catalog()));
    let report = validator.report(&values, &options);

    let source = args.file.display().to_string();
    redacted_info!(
        "Validated {} against endpoint {}: {} invalid field(s)",
        source,
        values.endpoint_uri.as_deref().unwrap_or("<none>"),
        report.errors.len()
    );

    let format = args.format.map(OutputFormat::from).unwrap_or(config.default_format);
    let rendered = render(&report, &source, format)?;
    let outcome = if report.is_valid() {
        Outcome::Valid
    } else {
        Outcome::Invalid
    };

    Ok((outcome, rendered))
}

fn render(report: &ValidationReport, source: &str, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => output::render_report_text(report, source),
        OutputFormat::Json => output::render_report_json(report)?,
    })
}

pub fn messages(args: &MessagesArgs, config: &EngineConfig) -> Result<String> {
    let catalog = config.message_catalog();
    let format = args.format.map(OutputFormat::from).unwrap_or(config.default_format);
    Ok(match format {
        OutputFormat::Text => output::render_messages_text(&catalog),
        OutputFormat::Json => output::render_messages_json(&catalog)?,
    })
}
