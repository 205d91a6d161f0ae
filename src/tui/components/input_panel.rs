//! Input panel for composing the review draft.
//!
//! Renders the draft (or a placeholder), its character and line counts, any
//! validation or load error, the optional file path prompt, and key hints.

use crate::tui::state::DraftState;

use super::text_wrap::{truncate_to_width, wrap_words};

/// Title shown above the draft.
pub const INPUT_TITLE: &str = "Input Reviews";

/// Placeholder shown while the draft is empty.
pub const INPUT_PLACEHOLDER: &str = "Paste reviews here (one per line works best)...";

const CURSOR: char = '▏';
const HINTS: &str =
    "Ctrl+S analyze  Ctrl+L sample data  Ctrl+O load .txt  Ctrl+X clear  Esc quit";

/// Context for rendering the input panel.
#[derive(Debug, Clone, Copy)]
pub struct InputPanelViewContext<'a> {
    /// Current draft.
    pub draft: &'a DraftState,
    /// Validation or load error to display, if any.
    pub error: Option<&'a str>,
    /// Path being typed into the file prompt, when it is open.
    pub path_prompt: Option<&'a str>,
    /// Maximum line width in columns.
    pub max_width: usize,
    /// Lines available for the draft body.
    pub body_height: usize,
}

/// Component for the review input stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputPanelComponent;

impl InputPanelComponent {
    /// Renders the input panel.
    #[must_use]
    pub fn view(ctx: &InputPanelViewContext<'_>) -> String {
        let mut output = format!("{INPUT_TITLE}\n\n");
        let content_width = ctx.max_width.saturating_sub(2);

        for line in Self::body_lines(ctx.draft, content_width, ctx.body_height) {
            output.push_str("  ");
            output.push_str(&line);
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&format!(
            "  {} characters, {} lines\n",
            ctx.draft.char_count(),
            ctx.draft.line_count()
        ));

        if let Some(error) = ctx.error {
            output.push_str(&truncate_to_width(&format!("  Error: {error}"), ctx.max_width));
            output.push('\n');
        }

        if let Some(path) = ctx.path_prompt {
            output.push_str(&truncate_to_width(
                &format!("  Load file: {path}{CURSOR}"),
                ctx.max_width,
            ));
            output.push('\n');
            output.push_str("  Enter load  Esc cancel\n");
        } else {
            output.push_str(&truncate_to_width(&format!("  {HINTS}"), ctx.max_width));
            output.push('\n');
        }

        output
    }

    /// Draft lines to display, keeping the tail in view as the draft grows.
    fn body_lines(draft: &DraftState, width: usize, height: usize) -> Vec<String> {
        if draft.text().is_empty() {
            return vec![format!("{CURSOR}{INPUT_PLACEHOLDER}")];
        }

        let mut lines: Vec<String> = draft
            .text()
            .split('\n')
            .flat_map(|line| {
                let wrapped = wrap_words(line, width);
                if wrapped.is_empty() {
                    vec![String::new()]
                } else {
                    wrapped
                }
            })
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push(CURSOR);
        }

        let skip = lines.len().saturating_sub(height.max(1));
        lines.split_off(skip)
    }
}
