//! Terminal key events to session commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lockr_search::{Direction, SessionCommand};

/// Returns `None` for keys the picker ignores.
pub fn command_for(event: KeyEvent) -> Option<SessionCommand> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    // AltGr arrives as CONTROL | ALT and produces ordinary characters.
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL)
        && !event.modifiers.contains(KeyModifiers::ALT);

    match event.code {
        KeyCode::Esc => Some(SessionCommand::Cancel),
        KeyCode::Char('c') if ctrl => Some(SessionCommand::Cancel),
        KeyCode::Char('p') if ctrl => Some(SessionCommand::Move(Direction::Previous)),
        KeyCode::Char('n') if ctrl => Some(SessionCommand::Move(Direction::Next)),
        KeyCode::Enter => Some(SessionCommand::Accept),
        KeyCode::Up | KeyCode::BackTab => Some(SessionCommand::Move(Direction::Previous)),
        KeyCode::Down | KeyCode::Tab => Some(SessionCommand::Move(Direction::Next)),
        KeyCode::Backspace => Some(SessionCommand::Backspace),
        KeyCode::Char(c) if !ctrl && !c.is_control() => Some(SessionCommand::Insert(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_printable_chars_insert() {
        assert_eq!(
            command_for(press(KeyCode::Char('g'))),
            Some(SessionCommand::Insert('g'))
        );
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(SessionCommand::Insert('G'))
        );
    }

    #[test]
    fn test_altgr_chars_insert() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;

        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('@'), altgr)),
            Some(SessionCommand::Insert('@'))
        );
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('{'), altgr)),
            Some(SessionCommand::Insert('{'))
        );
    }

    #[test]
    fn test_navigation_keys() {
        let previous = Some(SessionCommand::Move(Direction::Previous));
        let next = Some(SessionCommand::Move(Direction::Next));

        assert_eq!(command_for(press(KeyCode::Up)), previous);
        assert_eq!(command_for(press(KeyCode::BackTab)), previous);
        assert_eq!(command_for(ctrl('p')), previous);
        assert_eq!(command_for(press(KeyCode::Down)), next);
        assert_eq!(command_for(press(KeyCode::Tab)), next);
        assert_eq!(command_for(ctrl('n')), next);
    }

    #[test]
    fn test_termination_keys() {
        assert_eq!(command_for(press(KeyCode::Enter)), Some(SessionCommand::Accept));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(SessionCommand::Cancel));
        assert_eq!(command_for(ctrl('c')), Some(SessionCommand::Cancel));
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(command_for(ctrl('x')), None);
        assert_eq!(command_for(press(KeyCode::F(1))), None);

        let mut release = press(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(command_for(release), None);
    }
}
