//! Rendering logic for the review dashboard TUI.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::{CHROME_HEIGHT, MIN_LIST_HEIGHT, ReviewPulseApp};
use crate::tui::components::{DashboardView, InputPanelComponent, InputPanelViewContext};
use crate::tui::state::ViewState;

/// Title shown while a request is in flight.
pub(crate) const ANALYZING_TITLE: &str = "Analyzing Reviews...";

/// Subtitle shown while a request is in flight.
pub(crate) const ANALYZING_SUBTITLE: &str = "Consulting the AI model for insights.";

/// Lines used by the input panel around the draft body.
const INPUT_PANEL_CHROME: usize = 7;

/// Blank separator, section title, and filter bar above the review rows.
const LIST_CHROME: usize = 3;

impl ReviewPulseApp {
    /// Renders the current stage without viewport normalisation.
    pub(super) fn render_body(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = self.render_header();
        match &self.view_state {
            ViewState::Idle | ViewState::Errored(_) => output.push_str(&self.render_input_stage()),
            ViewState::Analyzing => output.push_str(&Self::render_analyzing()),
            ViewState::Result(_) => output.push_str(&self.render_dashboard()),
        }
        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let stage = match &self.view_state {
            ViewState::Idle | ViewState::Errored(_) => "Input",
            ViewState::Analyzing => "Analyzing",
            ViewState::Result(_) => "Dashboard",
        };
        format!("ReviewPulse - Customer Review Sentiment [{stage}]\n\n")
    }

    fn render_input_stage(&self) -> String {
        let body_height = self
            .visible_body_height()
            .saturating_sub(INPUT_PANEL_CHROME)
            .max(1);
        let ctx = InputPanelViewContext {
            draft: &self.draft,
            error: self.view_state.error_message(),
            path_prompt: self.path_prompt.as_deref(),
            max_width: self.content_width(),
            body_height,
        };
        InputPanelComponent::view(&ctx)
    }

    fn render_analyzing() -> String {
        format!("\n  {ANALYZING_TITLE}\n  {ANALYZING_SUBTITLE}\n")
    }

    fn render_dashboard(&self) -> String {
        let Some(result) = self.view_state.result() else {
            return String::new();
        };
        let dashboard = DashboardView::new(result, self.content_width());

        let mut body = self.dashboard_summary(&dashboard);
        body.push('\n');
        body.push_str(&dashboard.review_list(
            &self.filter_state,
            &self.filtered_indices,
            self.calculate_list_height(),
        ));

        // The status bar stays on the last row however long the body is.
        let mut lines: Vec<&str> = body.lines().take(self.visible_body_height()).collect();
        lines.resize(self.visible_body_height(), "");
        let mut output: String = lines.iter().flat_map(|line| [*line, "\n"]).collect();
        output.push_str(&self.render_status_bar());
        output
    }

    /// Full summary when it leaves room for the list, otherwise the compact one.
    fn dashboard_summary(&self, dashboard: &DashboardView<'_>) -> String {
        let full = dashboard.summary();
        let needed = full
            .lines()
            .count()
            .saturating_add(LIST_CHROME)
            .saturating_add(MIN_LIST_HEIGHT);
        if needed <= self.visible_body_height() {
            full
        } else {
            dashboard.compact_summary()
        }
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        let position = if self.filtered_indices.is_empty() {
            0
        } else {
            self.filter_state.cursor_position.saturating_add(1)
        };
        let hints = if self.width <= 80 {
            "q:quit  ?:help  j/k:move  f:filter  b:back"
        } else {
            "j/k:move  a/p/n/u:filter  f:cycle  b:new analysis  ?:help  q:quit"
        };
        format!("{position}/{}  {hints}\n", self.filtered_indices.len())
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Review list:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first review
  End, G     Go to last review

Filtering:
  a          Show all reviews
  p          Positive only
  n          Negative only
  u          Neutral only
  f          Cycle filters

Other:
  b, Esc     Start a new analysis (keeps the draft)
  ?          Toggle this help
  q          Quit

Input stage:
  Ctrl+S     Analyze the draft
  Ctrl+L     Load sample data
  Ctrl+O     Load a .txt file
  Ctrl+X     Clear the draft

Press any key to close this help.
";
        help_text.to_owned()
    }

    /// Rows available below the header and above the status bar.
    const fn visible_body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }

    /// Calculates the number of lines available for review rows.
    pub(super) fn calculate_list_height(&self) -> usize {
        let summary_height = self.view_state.result().map_or(0, |result| {
            let dashboard = DashboardView::new(result, self.content_width());
            self.dashboard_summary(&dashboard).lines().count()
        });
        self.visible_body_height()
            .saturating_sub(summary_height)
            .saturating_sub(LIST_CHROME)
            .max(1)
    }
}
