//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::analysis::AnalysisResult;

use super::state::SentimentFilter;

/// Messages for the review dashboard TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one review.
    CursorUp,
    /// Move cursor down one review.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first review.
    Home,
    /// Move cursor to last review.
    End,

    // Filter changes
    /// Apply a sentiment filter.
    SetFilter(SentimentFilter),
    /// Cycle through the sentiment filters.
    CycleFilter,

    // Draft editing
    /// Append a character to the draft.
    InsertChar(char),
    /// Append a newline to the draft.
    InsertNewline,
    /// Delete the last draft character.
    DeleteChar,
    /// Empty the draft.
    ClearDraft,
    /// Replace the draft with the bundled sample reviews.
    LoadSample,

    // File path prompt
    /// Open the prompt for a `.txt` file path.
    OpenPathPrompt,
    /// Append a character to the path being typed.
    PathPromptInsertChar(char),
    /// Delete the last character of the path being typed.
    PathPromptDeleteChar,
    /// Load the file at the typed path.
    PathPromptConfirm,
    /// Close the prompt without loading.
    PathPromptCancel,

    // Analysis
    /// Submit the draft for analysis.
    SubmitDraft,
    /// Analysis finished with a result.
    AnalysisComplete(AnalysisResult),
    /// Analysis failed with a user-facing message.
    AnalysisFailed(String),
    /// Return from the dashboard to the input stage.
    ResetToInput,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for review list cursor movement.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for sentiment filter changes.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(self, Self::SetFilter(_) | Self::CycleFilter)
    }

    /// Returns true for draft edits.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertNewline
                | Self::DeleteChar
                | Self::ClearDraft
                | Self::LoadSample
        )
    }

    /// Returns true for file path prompt messages.
    #[must_use]
    pub const fn is_path_prompt(&self) -> bool {
        matches!(
            self,
            Self::OpenPathPrompt
                | Self::PathPromptInsertChar(_)
                | Self::PathPromptDeleteChar
                | Self::PathPromptConfirm
                | Self::PathPromptCancel
        )
    }

    /// Returns true for submission, completion, and reset messages.
    #[must_use]
    pub const fn is_analysis(&self) -> bool {
        matches!(
            self,
            Self::SubmitDraft
                | Self::AnalysisComplete(_)
                | Self::AnalysisFailed(_)
                | Self::ResetToInput
        )
    }
}
