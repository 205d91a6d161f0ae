//! Submission, completion, and reset handlers.
//!
//! A submit that the view state accepts starts exactly one background
//! analysis. The blocking provider call runs on tokio's blocking pool and
//! its outcome returns to the update loop as `AnalysisComplete` or
//! `AnalysisFailed`.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use tokio::task::JoinError;

use super::ReviewPulseApp;
use crate::analysis::{AnalysisResult, ReviewAnalysisService, analyze};
use crate::tui::messages::AppMsg;
use crate::tui::state::{FilterState, SubmitOutcome, UNEXPECTED_ERROR_MESSAGE};

impl ReviewPulseApp {
    /// Validates the draft and starts the analysis.
    pub(super) fn handle_submit_draft(&mut self) -> Option<Cmd> {
        match self.view_state.submit(self.draft.text()) {
            SubmitOutcome::Started => {
                self.path_prompt = None;
                Some(spawn_analysis_request(
                    Arc::clone(&self.service),
                    self.draft.text().to_owned(),
                ))
            }
            SubmitOutcome::Rejected => {
                tracing::debug!("blank draft rejected");
                None
            }
            SubmitOutcome::Ignored => None,
        }
    }

    /// Shows the dashboard for a completed analysis.
    pub(super) fn handle_analysis_complete(&mut self, result: &AnalysisResult) -> Option<Cmd> {
        if !self.view_state.is_analyzing() {
            return None;
        }
        self.view_state.complete(Ok(result.clone()));
        self.filter_state = FilterState::new();
        self.rebuild_filter_cache();
        None
    }

    /// Returns to the input stage showing `message`.
    pub(super) fn handle_analysis_failed(&mut self, message: &str) -> Option<Cmd> {
        self.view_state.complete(Err(message.to_owned()));
        None
    }

    /// Discards the result and returns to the input stage.
    ///
    /// The draft is kept so it can be edited and resubmitted.
    pub(super) fn handle_reset_to_input(&mut self) -> Option<Cmd> {
        if self.view_state.reset() {
            self.filter_state = FilterState::new();
            self.filtered_indices.clear();
            self.show_help = false;
        }
        None
    }
}

/// Runs one analysis of `text` on the blocking pool.
fn spawn_analysis_request(service: Arc<dyn ReviewAnalysisService>, text: String) -> Cmd {
    Box::pin(async move {
        let message =
            match tokio::task::spawn_blocking(move || analyze(service.as_ref(), &text)).await {
                Ok(Ok(result)) => AppMsg::AnalysisComplete(result),
                Ok(Err(error)) => AppMsg::AnalysisFailed(error.to_string()),
                Err(error) => {
                    tracing::error!(error = %error, "analysis task failed");
                    AppMsg::AnalysisFailed(join_error_message(error))
                }
            };

        Some(Box::new(message) as Box<dyn Any + Send>)
    })
}

/// Panic message of a failed task, or the generic unexpected-error text.
fn join_error_message(error: JoinError) -> String {
    if !error.is_panic() {
        return UNEXPECTED_ERROR_MESSAGE.to_owned();
    }
    let payload = error.into_panic();
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|text| (*text).to_owned()))
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_owned())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;

    use super::join_error_message;
    use crate::analysis::ReviewAnalysisService;
    use crate::analysis::test_support::{StubReviewAnalysisService, mixed_reply};
    use crate::tui::state::UNEXPECTED_ERROR_MESSAGE;

    #[rstest]
    #[case::string_payload(Some("boom"), "boom")]
    #[case::no_message(None, UNEXPECTED_ERROR_MESSAGE)]
    #[tokio::test]
    async fn join_errors_map_to_messages(#[case] panic_text: Option<&'static str>, #[case] expected: &str) {
        let handle = tokio::spawn(async move {
            if let Some(text) = panic_text {
                panic!("{text}");
            }
            std::panic::panic_any(42_u8);
        });

        let error = handle.await.expect_err("task should panic");

        assert_eq!(join_error_message(error), expected);
    }

    #[tokio::test]
    async fn spawned_request_reports_completion() {
        let service: Arc<dyn ReviewAnalysisService> =
            Arc::new(StubReviewAnalysisService::success(mixed_reply()));

        let cmd = super::spawn_analysis_request(service, "reviews".to_owned());
        let message = cmd
            .await
            .and_then(|boxed| boxed.downcast::<crate::tui::messages::AppMsg>().ok());

        assert!(matches!(
            message.as_deref(),
            Some(crate::tui::messages::AppMsg::AnalysisComplete(result)) if result.total_reviews() == 5
        ));
    }
}
