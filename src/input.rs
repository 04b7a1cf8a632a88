//! Keyboard input handling for the viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the viewer
    Quit,
    /// Switch to the next character preset
    CyclePreset,
    /// Switch to the next color scheme
    CycleScheme,
    /// No action needed
    None,
}

/// Map a key event to a viewer action.
///
/// - `q`, `Esc`, `Ctrl+C`: quit
/// - `p`: next preset
/// - `c`: next color scheme
///
/// Key releases and repeats are ignored.
pub fn handle_key_event(event: KeyEvent) -> KeyAction {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::CyclePreset,
        KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::CycleScheme,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE)), KeyAction::Quit);
        assert_eq!(handle_key_event(press(KeyCode::Esc, KeyModifiers::NONE)), KeyAction::Quit);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_cycle_keys() {
        assert_eq!(
            handle_key_event(press(KeyCode::Char('p'), KeyModifiers::NONE)),
            KeyAction::CyclePreset
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            KeyAction::CycleScheme
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(handle_key_event(press(KeyCode::Char('x'), KeyModifiers::NONE)), KeyAction::None);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            KeyAction::None
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), KeyAction::None);
    }
}
