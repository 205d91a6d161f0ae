//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on the current
//! stage: text keys edit the draft on the input stage but drive navigation
//! and filtering on the dashboard.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::SentimentFilter;

/// Stage-specific key mapping context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Draft editing on the input stage.
    Input,
    /// Typing a file path to load.
    PathPrompt,
    /// Waiting for the analysis to finish.
    Analyzing,
    /// Browsing the result dashboard.
    Dashboard,
}

/// Maps a key event to an application message for `context`.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if is_ctrl_char(key, 'c') {
        return Some(AppMsg::Quit);
    }

    match context {
        InputContext::Input => map_input_key(key),
        InputContext::PathPrompt => map_path_prompt_key(key),
        InputContext::Analyzing => None,
        InputContext::Dashboard => map_dashboard_key(key),
    }
}

fn map_input_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('s') => Some(AppMsg::SubmitDraft),
            KeyCode::Char('l') => Some(AppMsg::LoadSample),
            KeyCode::Char('x') => Some(AppMsg::ClearDraft),
            KeyCode::Char('o') => Some(AppMsg::OpenPathPrompt),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Enter => Some(AppMsg::InsertNewline),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::Tab => Some(AppMsg::InsertChar('\t')),
        KeyCode::Char(character) => text_char(key, character).map(AppMsg::InsertChar),
        _ => None,
    }
}

fn map_path_prompt_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Esc => Some(AppMsg::PathPromptCancel),
        KeyCode::Enter => Some(AppMsg::PathPromptConfirm),
        KeyCode::Backspace => Some(AppMsg::PathPromptDeleteChar),
        KeyCode::Char(character) => text_char(key, character).map(AppMsg::PathPromptInsertChar),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_dashboard_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('f') => Some(AppMsg::CycleFilter),
        KeyCode::Char('a') => Some(AppMsg::SetFilter(SentimentFilter::All)),
        KeyCode::Char('p') => Some(AppMsg::SetFilter(SentimentFilter::Positive)),
        KeyCode::Char('n') => Some(AppMsg::SetFilter(SentimentFilter::Negative)),
        KeyCode::Char('u') => Some(AppMsg::SetFilter(SentimentFilter::Neutral)),
        KeyCode::Char('b') | KeyCode::Esc => Some(AppMsg::ResetToInput),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

/// Accepts plain and shifted characters; rejects Ctrl and Alt chords.
fn text_char(key: &bubbletea_rs::event::KeyMsg, character: char) -> Option<char> {
    let chorded = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    (!chorded && !character.is_control()).then_some(character)
}

fn is_ctrl_char(key: &bubbletea_rs::event::KeyMsg, expected: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char(expected)
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::{InputContext, map_key_to_message_with_context};
    use crate::tui::messages::AppMsg;
    use crate::tui::state::SentimentFilter;

    const fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    fn map(code: KeyCode, modifiers: KeyModifiers, context: InputContext) -> Option<AppMsg> {
        map_key_to_message_with_context(&key(code, modifiers), context)
    }

    #[rstest]
    #[case(InputContext::Input)]
    #[case(InputContext::PathPrompt)]
    #[case(InputContext::Analyzing)]
    #[case(InputContext::Dashboard)]
    fn ctrl_c_quits_everywhere(#[case] context: InputContext) {
        assert!(matches!(
            map(KeyCode::Char('c'), KeyModifiers::CONTROL, context),
            Some(AppMsg::Quit)
        ));
    }

    #[test]
    fn input_stage_edits_draft() {
        assert!(matches!(
            map(KeyCode::Char('q'), KeyModifiers::NONE, InputContext::Input),
            Some(AppMsg::InsertChar('q'))
        ));
        assert!(matches!(
            map(KeyCode::Char('Q'), KeyModifiers::SHIFT, InputContext::Input),
            Some(AppMsg::InsertChar('Q'))
        ));
        assert!(matches!(
            map(KeyCode::Enter, KeyModifiers::NONE, InputContext::Input),
            Some(AppMsg::InsertNewline)
        ));
        assert!(matches!(
            map(KeyCode::Backspace, KeyModifiers::NONE, InputContext::Input),
            Some(AppMsg::DeleteChar)
        ));
    }

    #[rstest]
    #[case('s', AppMsg::SubmitDraft)]
    #[case('l', AppMsg::LoadSample)]
    #[case('x', AppMsg::ClearDraft)]
    #[case('o', AppMsg::OpenPathPrompt)]
    fn input_stage_control_chords(#[case] character: char, #[case] expected: AppMsg) {
        let mapped = map(KeyCode::Char(character), KeyModifiers::CONTROL, InputContext::Input);

        assert_eq!(mapped, Some(expected));
    }

    #[test]
    fn alt_chords_are_not_inserted() {
        assert!(map(KeyCode::Char('x'), KeyModifiers::ALT, InputContext::Input).is_none());
    }

    #[test]
    fn analyzing_ignores_submit() {
        assert!(map(KeyCode::Char('s'), KeyModifiers::CONTROL, InputContext::Analyzing).is_none());
        assert!(map(KeyCode::Char('q'), KeyModifiers::NONE, InputContext::Analyzing).is_none());
    }

    #[test]
    fn path_prompt_keys() {
        assert!(matches!(
            map(KeyCode::Char('a'), KeyModifiers::NONE, InputContext::PathPrompt),
            Some(AppMsg::PathPromptInsertChar('a'))
        ));
        assert!(matches!(
            map(KeyCode::Enter, KeyModifiers::NONE, InputContext::PathPrompt),
            Some(AppMsg::PathPromptConfirm)
        ));
        assert!(matches!(
            map(KeyCode::Esc, KeyModifiers::NONE, InputContext::PathPrompt),
            Some(AppMsg::PathPromptCancel)
        ));
    }

    #[rstest]
    #[case('a', SentimentFilter::All)]
    #[case('p', SentimentFilter::Positive)]
    #[case('n', SentimentFilter::Negative)]
    #[case('u', SentimentFilter::Neutral)]
    fn dashboard_filter_keys(#[case] character: char, #[case] expected: SentimentFilter) {
        let mapped = map(KeyCode::Char(character), KeyModifiers::NONE, InputContext::Dashboard);

        assert!(matches!(mapped, Some(AppMsg::SetFilter(filter)) if filter == expected));
    }

    #[rstest]
    #[case(KeyCode::Char('b'))]
    #[case(KeyCode::Esc)]
    fn dashboard_reset_keys(#[case] code: KeyCode) {
        assert!(matches!(
            map(code, KeyModifiers::NONE, InputContext::Dashboard),
            Some(AppMsg::ResetToInput)
        ));
    }
}
