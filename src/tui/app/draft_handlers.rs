//! Draft editing and file path prompt handlers.
//!
//! Edits apply only on the input stage and clear any displayed error. The
//! path prompt collects a path and loads the file into the draft on confirm;
//! load failures are shown as the input-stage error and leave the draft as
//! it was.

use bubbletea_rs::Cmd;
use camino::Utf8Path;

use super::ReviewPulseApp;

impl ReviewPulseApp {
    fn after_draft_edit(&mut self) {
        self.view_state.clear_input_error();
    }

    /// Appends a typed character to the draft.
    pub(super) fn handle_insert_char(&mut self, character: char) -> Option<Cmd> {
        self.draft.push_char(character);
        self.after_draft_edit();
        None
    }

    /// Appends a newline to the draft.
    pub(super) fn handle_insert_newline(&mut self) -> Option<Cmd> {
        self.draft.push_newline();
        self.after_draft_edit();
        None
    }

    /// Removes the last draft character.
    pub(super) fn handle_delete_char(&mut self) -> Option<Cmd> {
        self.draft.backspace();
        self.after_draft_edit();
        None
    }

    /// Empties the draft.
    pub(super) fn handle_clear_draft(&mut self) -> Option<Cmd> {
        self.draft.clear();
        self.after_draft_edit();
        None
    }

    /// Replaces the draft with the bundled sample reviews.
    pub(super) fn handle_load_sample(&mut self) -> Option<Cmd> {
        self.draft.load_sample();
        self.after_draft_edit();
        None
    }

    /// Opens the file path prompt.
    pub(super) fn handle_open_path_prompt(&mut self) -> Option<Cmd> {
        self.path_prompt = Some(String::new());
        None
    }

    /// Appends a character to the path being typed.
    pub(super) fn handle_path_insert_char(&mut self, character: char) -> Option<Cmd> {
        if let Some(path) = self.path_prompt.as_mut() {
            path.push(character);
        }
        None
    }

    /// Removes the last character of the path being typed.
    pub(super) fn handle_path_delete_char(&mut self) -> Option<Cmd> {
        if let Some(path) = self.path_prompt.as_mut() {
            let _removed = path.pop();
        }
        None
    }

    /// Loads the file at the typed path into the draft and closes the prompt.
    pub(super) fn handle_path_confirm(&mut self) -> Option<Cmd> {
        let path = self.path_prompt.take()?;
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return None;
        }

        match self.draft.load_file(Utf8Path::new(trimmed)) {
            Ok(()) => {
                tracing::debug!(path = trimmed, "loaded draft from file");
                self.view_state.clear_input_error();
            }
            Err(error) => {
                tracing::warn!(path = trimmed, error = %error, "draft file load failed");
                self.view_state.show_input_error(error.to_string());
            }
        }
        None
    }

    /// Closes the path prompt without loading.
    pub(super) fn handle_path_cancel(&mut self) -> Option<Cmd> {
        self.path_prompt = None;
        None
    }
}
