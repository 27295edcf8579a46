use anyhow::Context;
use clap::Parser;
use error_common::{log_error, ActionsError};
use ops_cli::commands::{self, Outcome};
use ops_cli::{Cli, Command};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Valid) => ExitCode::SUCCESS,
        Ok(Outcome::Invalid) => ExitCode::from(1),
        Err(e) => {
            log_error("actions", &e);
            eprintln!("error [{}]: {}", e.code(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<Outcome, ActionsError> {
    let config = commands::load_config(cli.config.as_deref())?;

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging = logging.verbose();
    }
    logger_redacted::init(&logging).map_err(|e| ActionsError::Logging(e.to_string()))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting actions CLI");

    match cli.command {
        Command::Validate(args) => {
            let (outcome, rendered) = commands::validate(&args, &config)?;
            emit(&rendered)?;
            Ok(outcome)
        }
        Command::Messages(args) => {
            emit(&commands::messages(&args, &config)?)?;
            Ok(Outcome::Valid)
        }
    }
}

fn emit(rendered: &str) -> Result<(), ActionsError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write output to stdout")?;
    Ok(())
}
