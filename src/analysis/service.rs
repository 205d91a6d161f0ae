//! Service abstraction and orchestration for review analysis.

use super::decode::decode_analysis;
use super::error::{AnalysisError, AnalysisFailure, ProviderError};
use super::model::AnalysisResult;
use super::prompt::AnalysisRequest;

/// Shared analysis contract used by the TUI and report adapters.
pub trait ReviewAnalysisService: Send + Sync + std::fmt::Debug {
    /// Sends `request` to the model and returns its raw text reply.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the provider call fails or yields no
    /// assistant text.
    fn request_analysis(&self, request: &AnalysisRequest) -> Result<String, ProviderError>;
}

/// Analyses `raw_text` with `service` and decodes the structured result.
///
/// Every failure is logged with its diagnostic cause and surfaced as the
/// single user-facing [`AnalysisError`].
///
/// # Errors
///
/// Returns [`AnalysisError`] when the provider call fails or its reply does
/// not satisfy the output schema.
pub fn analyze(
    service: &dyn ReviewAnalysisService,
    raw_text: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let request = AnalysisRequest::new(raw_text);
    if request.was_truncated() {
        tracing::warn!(
            limit = super::prompt::MAX_INPUT_CHARS,
            "review text exceeds the input limit and was truncated"
        );
    }

    let outcome = service
        .request_analysis(&request)
        .map_err(AnalysisError::from)
        .and_then(|reply| decode_analysis(&reply).map_err(AnalysisError::from));

    match &outcome {
        Ok(result) => tracing::info!(
            total_reviews = result.total_reviews(),
            "review analysis completed"
        ),
        Err(error) => log_failure(error),
    }
    outcome
}

fn log_failure(error: &AnalysisError) {
    match error.cause() {
        AnalysisFailure::Provider(cause) => {
            tracing::error!(error = %cause, "review analysis provider call failed");
        }
        AnalysisFailure::Decode(cause) => {
            tracing::error!(error = %cause, "review analysis reply failed validation");
        }
    }
}
