//! Error types raised while requesting and decoding an analysis.

use thiserror::Error;

/// User-facing message shown for every analysis failure.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze reviews. Please try again.";

/// Failures reported by an analysis provider.
///
/// These carry provider detail for diagnostics and are logged, never shown
/// to the user directly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// No API credential was configured.
    #[error(
        "AI API key is required (use --ai-api-key, REVIEWPULSE_AI_API_KEY, or OPENAI_API_KEY)"
    )]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("failed to configure AI HTTP client: {message}")]
    ClientSetup {
        /// Builder error detail.
        message: String,
    },

    /// Networking failed before a response was received.
    #[error("AI request transport failed: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },

    /// The provider answered with a non-success status.
    #[error("AI request failed with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The provider response envelope could not be decoded.
    #[error("AI response JSON decoding failed: {message}")]
    Envelope {
        /// Decoder error detail.
        message: String,
    },

    /// The provider response carried no assistant text.
    #[error("AI response did not contain assistant text")]
    EmptyReply,
}

/// Failures raised while validating the model's JSON reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The reply body was empty or whitespace.
    #[error("reply was empty")]
    EmptyReply,

    /// The reply was not a JSON document.
    #[error("reply is not valid JSON: {message}")]
    InvalidJson {
        /// Parser error detail.
        message: String,
    },

    /// A required field was absent.
    #[error("`{path}` is missing")]
    MissingField {
        /// JSON path of the absent field.
        path: String,
    },

    /// A field had the wrong JSON type.
    #[error("`{path}` must be {expected}")]
    WrongType {
        /// JSON path of the offending field.
        path: String,
        /// Description of the expected type.
        expected: &'static str,
    },

    /// A sentiment outside the closed set was returned.
    #[error("`{path}` has unsupported sentiment '{value}'")]
    UnknownSentiment {
        /// JSON path of the offending field.
        path: String,
        /// Value returned by the model.
        value: String,
    },
}

/// Underlying cause of an [`AnalysisError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// The provider call failed.
    Provider(ProviderError),
    /// The reply did not satisfy the output schema.
    Decode(DecodeError),
}

/// The single error surfaced by the analysis client.
///
/// Displays only [`ANALYSIS_FAILED_MESSAGE`]; the cause stays available to
/// diagnostics through [`AnalysisError::cause`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to analyze reviews. Please try again.")]
pub struct AnalysisError {
    cause: AnalysisFailure,
}

impl AnalysisError {
    /// Diagnostic cause of the failure.
    #[must_use]
    pub const fn cause(&self) -> &AnalysisFailure {
        &self.cause
    }
}

impl From<ProviderError> for AnalysisError {
    fn from(error: ProviderError) -> Self {
        Self {
            cause: AnalysisFailure::Provider(error),
        }
    }
}

impl From<DecodeError> for AnalysisError {
    fn from(error: DecodeError) -> Self {
        Self {
            cause: AnalysisFailure::Decode(error),
        }
    }
}
