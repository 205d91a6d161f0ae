//! Report mode: one analysis written to stdout.
//!
//! Blank input is rejected before any provider call. The blocking provider
//! call runs on tokio's blocking pool.

use std::io;

use reviewpulse::analysis::OpenAiReviewAnalysisService;
use reviewpulse::tui::state::SentimentFilter;
use reviewpulse::{AppError, ReviewAnalysisService, ReviewPulseConfig, analyze};

use super::initial_draft;
use super::output::{ReportFormat, render_report, write_report_to};

/// Runs report mode and writes the report to stdout.
///
/// # Errors
///
/// Returns [`AppError::BlankInput`] for blank input, [`AppError::Analysis`]
/// when the analysis fails, and [`AppError::Io`] when output fails.
pub async fn run(config: &ReviewPulseConfig) -> Result<(), AppError> {
    let draft = initial_draft(config)?;
    let filter = config.report_filter()?;
    let format = ReportFormat::from_json_flag(config.json);
    let service = OpenAiReviewAnalysisService::new(config.analysis_config());

    let report = tokio::task::spawn_blocking(move || {
        run_with_service(&service, &draft, format, filter)
    })
    .await
    .map_err(|error| AppError::Io {
        message: format!("report task failed: {error}"),
    })??;

    let mut stdout = io::stdout().lock();
    write_report_to(&mut stdout, &report)
}

/// Analyses `draft` with `service` and renders the report.
///
/// # Errors
///
/// Returns [`AppError::BlankInput`] without calling `service` when `draft`
/// is blank, and [`AppError::Analysis`] when the analysis fails.
pub fn run_with_service(
    service: &dyn ReviewAnalysisService,
    draft: &str,
    format: ReportFormat,
    filter: SentimentFilter,
) -> Result<String, AppError> {
    if draft.trim().is_empty() {
        return Err(AppError::BlankInput);
    }
    let result = analyze(service, draft)?;
    render_report(&result, format, filter)
}
