//! Navigation and filter handlers for the result list.
//!
//! Cursor movement is clamped to the filtered rows and the scroll offset is
//! adjusted so the cursor stays in the visible window. Filter changes rebuild
//! the cached indices without touching the analysis result.

use bubbletea_rs::Cmd;

use super::{ROW_HEIGHT_ESTIMATE, ReviewPulseApp};
use crate::tui::state::SentimentFilter;

impl ReviewPulseApp {
    /// Number of review rows moved by one page.
    pub(super) fn rows_per_page(&self) -> usize {
        self.calculate_list_height()
            .checked_div(ROW_HEIGHT_ESTIMATE)
            .unwrap_or(1)
            .max(1)
    }

    /// Adjusts the scroll offset so the cursor remains within the viewport.
    pub(super) fn adjust_scroll_to_cursor(&mut self) {
        let rows = self.rows_per_page();
        self.filter_state.ensure_cursor_visible(rows);
    }

    const fn max_index(&self) -> usize {
        self.filtered_indices.len().saturating_sub(1)
    }

    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.filter_state.cursor_up();
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        self.filter_state.cursor_down(self.max_index());
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles page up navigation.
    pub(super) fn handle_page_up(&mut self) -> Option<Cmd> {
        self.filter_state.page_up(self.rows_per_page());
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        self.filter_state
            .page_down(self.rows_per_page(), self.max_index());
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles Home key navigation.
    pub(super) const fn handle_home(&mut self) -> Option<Cmd> {
        self.filter_state.home();
        None
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        self.filter_state.end(self.max_index());
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles a `SetFilter` message by applying the given filter.
    pub(super) fn handle_set_filter(&mut self, filter: SentimentFilter) -> Option<Cmd> {
        if self.filter_state.select_filter(filter) {
            tracing::debug!(filter = %filter, "filter changed");
        }
        self.rebuild_filter_cache();
        None
    }

    /// Cycles All, Positive, Negative, Neutral, and back to All.
    pub(super) fn handle_cycle_filter(&mut self) -> Option<Cmd> {
        let next = self.filter_state.active_filter.next();
        self.handle_set_filter(next)
    }
}
