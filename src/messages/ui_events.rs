//! UI events - messages from the terminal to the App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // Filter editing
    CharInput(char),
    Backspace,

    // Navigation
    Up,
    Down,
    Enter,
    Escape,

    // System
    Interrupt,
}

/// Convert a key event to a UiEvent.
///
/// Returns `None` for keys the browser does not react to.
pub fn key_to_ui_event(key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Interrupt),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(UiEvent::Up),
        KeyCode::Down => Some(UiEvent::Down),
        KeyCode::Enter => Some(UiEvent::Enter),
        KeyCode::Esc => Some(UiEvent::Escape),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) && !c.is_control() => {
            Some(UiEvent::CharInput(c))
        }
        _ => None,
    }
}
