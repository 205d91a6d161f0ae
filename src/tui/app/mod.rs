//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! review dashboard. It owns the view-state machine, the draft, and the
//! filter state of the result list, and dispatches each message category to
//! a dedicated handler module.
//!
//! # Module Structure
//!
//! - `analysis_handlers`: Submission, completion, and reset
//! - `draft_handlers`: Draft editing and the file path prompt
//! - `navigation`: Cursor movement and sentiment filtering
//! - `lifecycle_handlers`: Quit, help, and resize handling
//! - `rendering`: View rendering methods for terminal output

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::analysis::{AnalysisResult, ReviewAnalysisService};

use super::input::InputContext;
use super::messages::AppMsg;
use super::state::{DraftState, FilterState, SentimentFilter, ViewState};

mod analysis_handlers;
mod draft_handlers;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Lines used by the header and status bar.
const CHROME_HEIGHT: usize = 3;

/// Review-list lines the full summary must leave free; below this the
/// dashboard falls back to the compact summary.
const MIN_LIST_HEIGHT: usize = 6;

/// Approximate lines per review row, used for paging.
const ROW_HEIGHT_ESTIMATE: usize = 4;

/// Main application model for the review dashboard TUI.
#[derive(Debug)]
pub struct ReviewPulseApp {
    /// Current stage of the application.
    view_state: ViewState,
    /// Draft text awaiting submission.
    draft: DraftState,
    /// Path being typed when the file prompt is open.
    path_prompt: Option<String>,
    /// Filter and cursor state for the result list.
    filter_state: FilterState,
    /// Cached indices of reviews matching the current filter.
    filtered_indices: Vec<usize>,
    /// Service used for submitted drafts.
    service: Arc<dyn ReviewAnalysisService>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    show_help: bool,
}

impl ReviewPulseApp {
    /// Creates an application on the input stage holding `draft`.
    #[must_use]
    pub fn new(draft: impl Into<String>, service: Arc<dyn ReviewAnalysisService>) -> Self {
        Self {
            view_state: ViewState::default(),
            draft: DraftState::new(draft),
            path_prompt: None,
            filter_state: FilterState::new(),
            filtered_indices: Vec::new(),
            service,
            width: 80,
            height: 24,
            show_help: false,
        }
    }

    /// Returns the current view state.
    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &DraftState {
        &self.draft
    }

    /// Returns the path being typed, when the file prompt is open.
    #[must_use]
    pub fn path_prompt(&self) -> Option<&str> {
        self.path_prompt.as_deref()
    }

    /// Returns the error shown on the input stage, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.view_state.error_message()
    }

    /// Returns the displayed analysis result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        self.view_state.result()
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn active_filter(&self) -> SentimentFilter {
        self.filter_state.active_filter
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.filter_state.cursor_position
    }

    /// Returns the count of reviews matching the active filter.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the original text of each review matching the active filter.
    #[must_use]
    pub fn filtered_texts(&self) -> Vec<&str> {
        let Some(result) = self.result() else {
            return Vec::new();
        };
        self.filtered_indices
            .iter()
            .filter_map(|index| result.reviews().get(*index))
            .map(crate::analysis::ReviewRecord::original_text)
            .collect()
    }

    /// Whether the help overlay is visible.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Rebuilds the filtered indices cache from the displayed result.
    ///
    /// Call this after the result or the active filter changes.
    pub(crate) fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self.view_state.result().map_or_else(Vec::new, |result| {
            crate::tui::components::filtered_indices(result, self.filter_state.active_filter)
        });
        self.filter_state.clamp_cursor(self.filtered_indices.len());
    }

    /// Returns the current input context for stage-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        match &self.view_state {
            ViewState::Idle | ViewState::Errored(_) => {
                if self.path_prompt.is_some() {
                    InputContext::PathPrompt
                } else {
                    InputContext::Input
                }
            }
            ViewState::Analyzing => InputContext::Analyzing,
            ViewState::Result(_) => InputContext::Dashboard,
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_draft() {
            return self.handle_draft_msg(msg);
        }
        if msg.is_path_prompt() {
            return self.handle_path_prompt_msg(msg);
        }
        if msg.is_analysis() {
            return self.handle_analysis_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.result().is_none() {
            return None;
        }
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    /// Dispatches filter messages to their handlers.
    fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.result().is_none() {
            return None;
        }
        match msg {
            AppMsg::SetFilter(filter) => self.handle_set_filter(*filter),
            AppMsg::CycleFilter => self.handle_cycle_filter(),
            _ => {
                debug_assert!(false, "non-filter message routed to handle_filter_msg");
                None
            }
        }
    }

    /// Dispatches draft editing messages to their handlers.
    fn handle_draft_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if !self.view_state.is_input_stage() {
            return None;
        }
        match msg {
            AppMsg::InsertChar(character) => self.handle_insert_char(*character),
            AppMsg::InsertNewline => self.handle_insert_newline(),
            AppMsg::DeleteChar => self.handle_delete_char(),
            AppMsg::ClearDraft => self.handle_clear_draft(),
            AppMsg::LoadSample => self.handle_load_sample(),
            _ => {
                debug_assert!(false, "non-draft message routed to handle_draft_msg");
                None
            }
        }
    }

    /// Dispatches file path prompt messages to their handlers.
    fn handle_path_prompt_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if !self.view_state.is_input_stage() {
            return None;
        }
        match msg {
            AppMsg::OpenPathPrompt => self.handle_open_path_prompt(),
            AppMsg::PathPromptInsertChar(character) => self.handle_path_insert_char(*character),
            AppMsg::PathPromptDeleteChar => self.handle_path_delete_char(),
            AppMsg::PathPromptConfirm => self.handle_path_confirm(),
            AppMsg::PathPromptCancel => self.handle_path_cancel(),
            _ => {
                debug_assert!(
                    false,
                    "non-path-prompt message routed to handle_path_prompt_msg"
                );
                None
            }
        }
    }

    /// Dispatches analysis messages to their handlers.
    fn handle_analysis_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SubmitDraft => self.handle_submit_draft(),
            AppMsg::AnalysisComplete(result) => self.handle_analysis_complete(result),
            AppMsg::AnalysisFailed(message) => self.handle_analysis_failed(message),
            AppMsg::ResetToInput => self.handle_reset_to_input(),
            _ => {
                debug_assert!(false, "non-analysis message routed to handle_analysis_msg");
                None
            }
        }
    }
}
