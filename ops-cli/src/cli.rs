use actions_validation::AuthenticationType;
use clap::{Args, Parser, Subcommand, ValueEnum};
use config_engine::OutputFormat;
use std::path::PathBuf;

/// Validate identity-provider action configurations
#[derive(Parser, Debug)]
#[command(name = "actions", version)]
#[command(about = "Validate identity-provider action configurations")]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true, env = "ACTIONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an action configuration file
    Validate(ValidateArgs),
    /// List the active validation messages
    Messages(MessagesArgs),
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Action configuration (.json, .yaml, .yml, or `-` for JSON on stdin)
    pub file: PathBuf,

    /// Validate as a new action: every credential is required
    #[arg(long)]
    pub create: bool,

    /// The authentication section is being updated
    #[arg(long)]
    pub auth_update: bool,

    /// Authentication type the form is showing; defaults to the record's own
    #[arg(long, value_parser = parse_authentication_type)]
    pub auth_type: Option<AuthenticationType>,

    /// Output format; defaults to the configured one
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Args, Debug)]
pub struct MessagesArgs {
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_authentication_type(value: &str) -> Result<AuthenticationType, String> {
    value.parse().map_err(|e: actions_validation::ParseAuthenticationTypeError| e.to_string())
}
