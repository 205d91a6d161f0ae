//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewpulse.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWPULSE_AI_API_KEY`,
//!    `REVIEWPULSE_AI_MODEL`, and friends, plus `OPENAI_API_KEY` as a key
//!    fallback
//! 4. **Command-line arguments** – `--input-file`/`-f`, `--report`/`-R`, ...
//!
//! # Configuration File
//!
//! ```toml
//! ai_model = "gpt-4o-mini"
//! ai_base_url = "https://api.openai.com/v1"
//! ai_timeout_seconds = 60
//! log_file = "reviewpulse.log"
//! log_filter = "reviewpulse=debug"
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::analysis::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiAnalysisConfig};
use crate::error::AppError;
use crate::tui::state::SentimentFilter;

/// Environment variable consulted when no AI key is configured.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_LOG_FILTER: &str = "info";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Full-screen interactive dashboard.
    Interactive,
    /// One-shot analysis written to stdout.
    Report,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REVIEWPULSE_INPUT_FILE` or `--input-file`: Review text file to preload
/// - `REVIEWPULSE_FILTER` or `--filter`: Review filter applied to reports
/// - `REVIEWPULSE_AI_API_KEY`, `OPENAI_API_KEY`, or `--ai-api-key`
/// - `REVIEWPULSE_AI_BASE_URL` / `REVIEWPULSE_AI_MODEL`
/// - `REVIEWPULSE_LOG_FILE` / `REVIEWPULSE_LOG_FILTER`
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewpulse::ReviewPulseConfig;
///
/// let config = ReviewPulseConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWPULSE",
    discovery(
        dotfile_name = ".reviewpulse.toml",
        config_file_name = "reviewpulse.toml",
        app_name = "reviewpulse"
    )
)]
pub struct ReviewPulseConfig {
    /// Plain-text file whose contents pre-fill the review draft.
    ///
    /// Can be provided via:
    /// - CLI: `--input-file <PATH>` or `-f <PATH>`
    /// - Environment: `REVIEWPULSE_INPUT_FILE`
    /// - Config file: `input_file = "..."`
    #[ortho_config(cli_short = 'f')]
    pub input_file: Option<String>,

    /// Pre-fills the review draft with the bundled sample reviews.
    ///
    /// Can be provided via:
    /// - CLI: `--sample` / `-s`
    /// - Config file: `sample = true`
    #[ortho_config(cli_short = 's')]
    pub sample: bool,

    /// Runs one analysis and writes a report to stdout instead of starting
    /// the interactive dashboard.
    ///
    /// Can be provided via:
    /// - CLI: `--report` / `-R`
    /// - Config file: `report = true`
    ///
    /// Note: boolean values are not loaded from the environment.
    #[ortho_config(cli_short = 'R')]
    pub report: bool,

    /// Writes the report as JSON. Requires `report`.
    ///
    /// Can be provided via:
    /// - CLI: `--json` / `-j`
    /// - Config file: `json = true`
    #[ortho_config(cli_short = 'j')]
    pub json: bool,

    /// Review filter applied to the report's review list: `all`,
    /// `positive`, `negative`, or `neutral`. Requires `report`.
    #[ortho_config()]
    pub filter: Option<String>,

    /// Base URL of the OpenAI-compatible API.
    #[ortho_config()]
    pub ai_base_url: String,

    /// Model identifier used for analysis.
    #[ortho_config()]
    pub ai_model: String,

    /// API key for the analysis provider.
    ///
    /// Falls back to `OPENAI_API_KEY` when unset.
    #[ortho_config()]
    pub ai_api_key: Option<String>,

    /// Request timeout for the analysis provider, in seconds.
    #[ortho_config()]
    pub ai_timeout_seconds: Option<u64>,

    /// File receiving diagnostic logs.
    ///
    /// The interactive dashboard only logs when this is set.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// `tracing` filter directive, e.g. `info` or `reviewpulse=debug`.
    #[ortho_config()]
    pub log_filter: String,
}

impl Default for ReviewPulseConfig {
    fn default() -> Self {
        Self {
            input_file: None,
            sample: false,
            report: false,
            json: false,
            filter: None,
            ai_base_url: DEFAULT_BASE_URL.to_owned(),
            ai_model: DEFAULT_MODEL.to_owned(),
            ai_api_key: None,
            ai_timeout_seconds: None,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl ReviewPulseConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.report {
            OperationMode::Report
        } else {
            OperationMode::Interactive
        }
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when `input_file` and `sample`
    /// are both set, when `json` or `filter` is used without `report`, or
    /// when `filter` names an unknown filter.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.input_file.is_some() && self.sample {
            return Err(configuration_error(
                "--input-file and --sample cannot be used together",
            ));
        }
        if self.json && !self.report {
            return Err(configuration_error("--json requires --report"));
        }
        if self.filter.is_some() && !self.report {
            return Err(configuration_error("--filter requires --report"));
        }
        self.report_filter().map(|_| ())
    }

    /// Returns the filter applied to report output.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when `filter` cannot be parsed.
    pub fn report_filter(&self) -> Result<SentimentFilter, AppError> {
        self.filter.as_deref().map_or(Ok(SentimentFilter::All), |value| {
            value
                .parse::<SentimentFilter>()
                .map_err(|error| configuration_error(&error.to_string()))
        })
    }

    /// Resolves the AI key from configuration or `OPENAI_API_KEY`.
    ///
    /// Blank values are treated as absent.
    #[must_use]
    pub fn resolve_ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                env::var(OPENAI_API_KEY_ENV)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    /// Builds the analysis provider configuration.
    #[must_use]
    pub fn analysis_config(&self) -> OpenAiAnalysisConfig {
        OpenAiAnalysisConfig::new(
            self.ai_base_url.as_str(),
            self.ai_model.as_str(),
            self.resolve_ai_api_key(),
            self.ai_timeout_seconds.map(Duration::from_secs),
        )
    }
}

fn configuration_error(message: &str) -> AppError {
    AppError::Configuration {
        message: message.to_owned(),
    }
}

#[cfg(test)]
mod tests;
