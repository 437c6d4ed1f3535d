//! Key mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// The single game action: start, flap, or restart depending on state.
    Action,
    Quit,
    Other,
}

/// Map a key event. Key releases are ignored so terminals that report them
/// do not flap twice per press.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind == KeyEventKind::Release {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            GameInput::Quit
        }
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => GameInput::Action,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), GameInput::Action);
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::Action);
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::Action);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameInput::Quit
        );
        assert_eq!(map_key(press(KeyCode::Char('c'))), GameInput::Other);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), GameInput::Other);
    }
}
