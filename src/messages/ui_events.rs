//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // List navigation
    SelectNext,
    SelectPrev,
    ScrollToTop,
    ScrollToBottom,

    // Fetch actions
    Refresh,
    Retry,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Translate a key press into a UI event.
///
/// `error_shown` routes Enter to Retry only while the error view is up;
/// `help_shown` makes any key dismiss the help popup.
pub fn key_to_ui_event(key: KeyEvent, error_shown: bool, help_shown: bool) -> Option<UiEvent> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if help_shown {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('r') => {
            if error_shown {
                Some(UiEvent::Retry)
            } else {
                Some(UiEvent::Refresh)
            }
        }
        KeyCode::Enter if error_shown => Some(UiEvent::Retry),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => Some(UiEvent::ScrollToTop),
        KeyCode::End | KeyCode::Char('G') => Some(UiEvent::ScrollToBottom),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        _ => None,
    }
}
