//! Four-state view machine owned by the application shell.
//!
//! Transitions are explicit methods; states that cannot coexist (an
//! in-flight request and a result, say) are unrepresentable.

use crate::analysis::AnalysisResult;

/// Message shown when a blank draft is submitted.
pub const BLANK_INPUT_MESSAGE: &str = "Please enter some reviews or upload a file.";

/// Message shown when analysis fails without a usable message.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred while analyzing reviews.";

/// Current stage of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Input stage with no result and no error.
    #[default]
    Idle,
    /// One analysis request is in flight.
    Analyzing,
    /// Dashboard over a completed analysis.
    Result(AnalysisResult),
    /// Input stage displaying an error message.
    Errored(String),
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was accepted; the caller must start the analysis.
    Started,
    /// The draft was blank; the state now carries the validation message.
    Rejected,
    /// A request is already in flight or a result is displayed.
    Ignored,
}

impl ViewState {
    /// Whether the input stage is displayed.
    #[must_use]
    pub const fn is_input_stage(&self) -> bool {
        matches!(self, Self::Idle | Self::Errored(_))
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_analyzing(&self) -> bool {
        matches!(self, Self::Analyzing)
    }

    /// Error message to show above the input controls, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Displayed analysis result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Handles a submit of `draft` from the input stage.
    pub fn submit(&mut self, draft: &str) -> SubmitOutcome {
        if !self.is_input_stage() {
            return SubmitOutcome::Ignored;
        }
        if draft.trim().is_empty() {
            *self = Self::Errored(BLANK_INPUT_MESSAGE.to_owned());
            return SubmitOutcome::Rejected;
        }
        tracing::debug!(chars = draft.chars().count(), "view state: analyzing");
        *self = Self::Analyzing;
        SubmitOutcome::Started
    }

    /// Applies the outcome of the in-flight request.
    ///
    /// Ignored unless a request is in flight. A blank failure message is
    /// replaced with [`UNEXPECTED_ERROR_MESSAGE`].
    pub fn complete(&mut self, outcome: Result<AnalysisResult, String>) {
        if !self.is_analyzing() {
            tracing::debug!("view state: ignoring completion outside analyzing");
            return;
        }
        *self = match outcome {
            Ok(result) => {
                tracing::debug!(total_reviews = result.total_reviews(), "view state: result");
                Self::Result(result)
            }
            Err(message) if message.trim().is_empty() => {
                Self::Errored(UNEXPECTED_ERROR_MESSAGE.to_owned())
            }
            Err(message) => {
                tracing::debug!("view state: errored");
                Self::Errored(message)
            }
        };
    }

    /// Discards the displayed result and returns to a clean input stage.
    ///
    /// Returns `false` when no result was displayed.
    pub fn reset(&mut self) -> bool {
        if self.result().is_none() {
            return false;
        }
        tracing::debug!("view state: idle");
        *self = Self::Idle;
        true
    }

    /// Shows `message` on the input stage.
    ///
    /// Ignored outside the input stage.
    pub fn show_input_error(&mut self, message: impl Into<String>) {
        if self.is_input_stage() {
            *self = Self::Errored(message.into());
        }
    }

    /// Clears a displayed input error.
    pub fn clear_input_error(&mut self) {
        if matches!(self, Self::Errored(_)) {
            *self = Self::Idle;
        }
    }
}
