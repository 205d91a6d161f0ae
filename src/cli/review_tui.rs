//! Interactive dashboard mode.
//!
//! Stores the startup draft and analysis service for `ReviewPulseApp::init()`
//! and runs the bubbletea-rs program on the alternate screen.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;
use reviewpulse::analysis::OpenAiReviewAnalysisService;
use reviewpulse::tui::{ReviewPulseApp, set_analysis_service, set_initial_draft};
use reviewpulse::{AppError, ReviewPulseConfig};

use super::initial_draft;

/// Runs the interactive dashboard.
///
/// # Errors
///
/// Returns an error if the input file cannot be loaded or the TUI fails to
/// initialise.
pub async fn run(config: &ReviewPulseConfig) -> Result<(), AppError> {
    let draft = initial_draft(config)?;

    // If already set (e.g. re-running the TUI in the same process), the
    // existing values remain.
    let _draft_set = set_initial_draft(draft);
    let _service_set = set_analysis_service(Arc::new(OpenAiReviewAnalysisService::new(
        config.analysis_config(),
    )));

    run_tui().await.map_err(|error| AppError::Tui {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `ReviewPulseApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ReviewPulseApp>::builder()
        .alt_screen(true)
        .build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
