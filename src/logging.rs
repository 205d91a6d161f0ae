//! Diagnostic logging setup built on `tracing-subscriber`.
//!
//! The interactive dashboard owns the terminal, so it only logs when a log
//! file is configured. Report mode logs to stderr.

use std::io;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Where diagnostic log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Logging is switched off.
    Disabled,
    /// Log lines go to standard error.
    Stderr,
    /// Log lines are appended to the given file.
    File(Utf8PathBuf),
}

impl LogDestination {
    /// Picks the destination for a run.
    ///
    /// A configured log file always wins; otherwise the interactive
    /// dashboard disables logging and report mode uses stderr.
    #[must_use]
    pub fn select(log_file: Option<&str>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(Utf8PathBuf::from(path)),
            None if interactive => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when `filter` is not a valid
/// directive, [`AppError::Io`] when the log file cannot be opened, and
/// [`AppError::Configuration`] when a global subscriber is already set.
pub fn init_logging(filter: &str, destination: &LogDestination) -> Result<(), AppError> {
    let env_filter = build_env_filter(filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    let installed = match destination {
        LogDestination::Disabled => return Ok(()),
        LogDestination::Stderr => builder.with_writer(io::stderr).try_init(),
        LogDestination::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|error| AppError::Configuration {
        message: format!("failed to install log subscriber: {error}"),
    })
}

/// Parses a `tracing` filter directive.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] for malformed directives.
pub fn build_env_filter(filter: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(filter).map_err(|error| AppError::Configuration {
        message: format!("invalid log filter '{filter}': {error}"),
    })
}

/// Opens `path` for appending, creating it when absent.
fn open_log_file(path: &Utf8Path) -> Result<File, AppError> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| AppError::Io {
        message: format!("invalid log file path '{path}': no file name"),
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        AppError::Io {
            message: format!("failed to open log directory '{parent}': {error}"),
        }
    })?;
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    dir.open_with(file_name, &options)
        .map_err(|error| AppError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}
