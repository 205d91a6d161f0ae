//! Terminal User Interface for the review sentiment dashboard.
//!
//! This module provides an interactive TUI for composing review text,
//! submitting it for analysis, and browsing the resulting dashboard using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewPulseApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: View-state machine, draft, and filter state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for startup data. Call
//! [`set_initial_draft`] and [`set_analysis_service`] before starting the
//! program, and `ReviewPulseApp::init()` will retrieve them.

use std::sync::{Arc, OnceLock};

use crate::analysis::{OpenAiAnalysisConfig, OpenAiReviewAnalysisService, ReviewAnalysisService};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::ReviewPulseApp;

/// Global storage for the draft text shown at startup.
static INITIAL_DRAFT: OnceLock<String> = OnceLock::new();

/// Global storage for the analysis service used by submitted drafts.
static ANALYSIS_SERVICE: OnceLock<Arc<dyn ReviewAnalysisService>> = OnceLock::new();

/// Sets the draft text for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the draft was set, `false` if it was already set.
pub fn set_initial_draft(text: impl Into<String>) -> bool {
    INITIAL_DRAFT.set(text.into()).is_ok()
}

/// Sets the analysis service for the TUI application.
///
/// # Returns
///
/// `true` if the service was set, `false` if it was already set.
pub fn set_analysis_service(service: Arc<dyn ReviewAnalysisService>) -> bool {
    ANALYSIS_SERVICE.set(service).is_ok()
}

/// Gets a clone of the initial draft, or an empty string if unset.
pub(crate) fn get_initial_draft() -> String {
    INITIAL_DRAFT.get().cloned().unwrap_or_default()
}

/// Gets the configured analysis service.
///
/// Falls back to an OpenAI-compatible service with default settings, which
/// reads no credentials and therefore fails every request with a logged
/// missing-key cause.
pub(crate) fn get_analysis_service() -> Arc<dyn ReviewAnalysisService> {
    ANALYSIS_SERVICE.get().cloned().unwrap_or_else(|| {
        Arc::new(OpenAiReviewAnalysisService::new(
            OpenAiAnalysisConfig::default(),
        ))
    })
}
