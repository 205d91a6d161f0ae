//! Lifecycle and window handlers for the review dashboard TUI.
//!
//! This module handles terminal resize events and high-level lifecycle
//! messages such as quit and help toggling.

use bubbletea_rs::Cmd;

use super::ReviewPulseApp;
use crate::tui::messages::AppMsg;

impl ReviewPulseApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => self.handle_toggle_help(),
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(false, "non-lifecycle message routed to handle_lifecycle_msg");
                None
            }
        }
    }

    /// Help is only opened from the dashboard; it can always be closed.
    fn handle_toggle_help(&mut self) -> Option<Cmd> {
        if self.show_help || self.result().is_some() {
            self.show_help = !self.show_help;
        }
        None
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.adjust_scroll_to_cursor();
        None
    }
}
