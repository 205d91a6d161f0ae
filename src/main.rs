//! `ReviewPulse` CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reviewpulse::logging::{LogDestination, init_logging};
use reviewpulse::{AppError, OperationMode, ReviewPulseConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    let destination = LogDestination::select(
        config.log_file.as_deref(),
        mode == OperationMode::Interactive,
    );
    init_logging(&config.log_filter, &destination)?;

    match mode {
        OperationMode::Interactive => cli::review_tui::run(&config).await,
        OperationMode::Report => cli::report::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewPulseConfig, AppError> {
    ReviewPulseConfig::load().map_err(|error| AppError::Configuration {
        message: error.to_string(),
    })
}
