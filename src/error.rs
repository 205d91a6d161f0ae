//! Application-level errors surfaced by the `reviewpulse` binary.

use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::tui::state::{BLANK_INPUT_MESSAGE, DraftLoadError};

/// Failures that terminate a CLI run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI runtime failed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from the TUI runtime.
        message: String,
    },

    /// A report was requested for blank input.
    #[error("{}", BLANK_INPUT_MESSAGE)]
    BlankInput,

    /// The analysis request failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The input file could not be loaded.
    #[error(transparent)]
    DraftLoad(#[from] DraftLoadError),
}
