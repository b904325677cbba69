//! Key bindings.

use super::app::{Focus, UiCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Decodes a key press for the focused pane.
///
/// Release and repeat events are dropped so each press acts once.
pub fn key_to_command(focus: Focus, key: KeyEvent) -> Option<UiCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(UiCommand::Quit),
        KeyCode::Char('s' | 'S') => Some(UiCommand::ToggleOrder),
        KeyCode::Char('r' | 'R') => Some(UiCommand::Restart),
        KeyCode::Tab | KeyCode::BackTab => Some(UiCommand::SwitchFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| UiCommand::Place(digit as usize - 1)),
        code => match focus {
            Focus::Board => board_key(code),
            Focus::Moves => moves_key(code),
        },
    }
}

fn board_key(code: KeyCode) -> Option<UiCommand> {
    let (dcol, drow) = match code {
        KeyCode::Left => (-1, 0),
        KeyCode::Right => (1, 0),
        KeyCode::Up => (0, -1),
        KeyCode::Down => (0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => return Some(UiCommand::PlaceAtCursor),
        _ => return None,
    };
    Some(UiCommand::MoveCursor { dcol, drow })
}

fn moves_key(code: KeyCode) -> Option<UiCommand> {
    match code {
        KeyCode::Up => Some(UiCommand::SelectPrevious),
        KeyCode::Down => Some(UiCommand::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiCommand::JumpToSelected),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_place_cells() {
        assert_eq!(
            key_to_command(Focus::Board, press(KeyCode::Char('1'))),
            Some(UiCommand::Place(0))
        );
        assert_eq!(
            key_to_command(Focus::Moves, press(KeyCode::Char('9'))),
            Some(UiCommand::Place(8))
        );
        assert_eq!(key_to_command(Focus::Board, press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            key_to_command(Focus::Board, press(KeyCode::Up)),
            Some(UiCommand::MoveCursor { dcol: 0, drow: -1 })
        );
        assert_eq!(
            key_to_command(Focus::Moves, press(KeyCode::Up)),
            Some(UiCommand::SelectPrevious)
        );
        assert_eq!(
            key_to_command(Focus::Moves, press(KeyCode::Enter)),
            Some(UiCommand::JumpToSelected)
        );
    }

    #[test]
    fn test_letter_bindings_ignore_case() {
        for (lower, upper, command) in [
            ('q', 'Q', UiCommand::Quit),
            ('s', 'S', UiCommand::ToggleOrder),
            ('r', 'R', UiCommand::Restart),
        ] {
            assert_eq!(key_to_command(Focus::Board, press(KeyCode::Char(lower))), Some(command));
            let shifted = KeyEvent::new(KeyCode::Char(upper), KeyModifiers::SHIFT);
            assert_eq!(key_to_command(Focus::Moves, shifted), Some(command));
        }
    }

    #[test]
    fn test_release_is_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(key_to_command(Focus::Board, release), None);
    }
}
