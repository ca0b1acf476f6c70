//! Key bindings

use crossterm::event::KeyCode;

use fretdrill::{Command, Input, Position, SessionState};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(Input),
    Command(Command),
    Quit,
}

/// Map a key to an action given the current selection
pub fn action_for(key: KeyCode, state: &SessionState) -> Option<Action> {
    let action = match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,

        KeyCode::Char('t') | KeyCode::Char('T') => {
            Action::Input(Input::SetTonality(state.tonality.toggle()))
        }
        KeyCode::Char(c @ '1'..='5') => {
            let number = c.to_digit(10)? as u8;
            Action::Input(Input::SetPosition(Position::new(number).ok()?))
        }
        KeyCode::Up => Action::Input(Input::SetPosition(state.position.prev())),
        KeyCode::Down => Action::Input(Input::SetPosition(state.position.next())),
        KeyCode::Right | KeyCode::Char(']') => Action::Input(Input::SetRoot(state.root.next())),
        KeyCode::Left | KeyCode::Char('[') => Action::Input(Input::SetRoot(state.root.prev())),
        KeyCode::Char('p') | KeyCode::Char('P') => {
            Action::Input(Input::SetPentatonic(!state.pentatonic))
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            Action::Input(Input::SetShowShape(!state.show_shape))
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Action::Command(Command::Randomize),
        KeyCode::Char(' ') | KeyCode::Enter => Action::Command(Command::Start),
        KeyCode::Char('x') | KeyCode::Char('X') => Action::Command(Command::Stop),

        _ => return None,
    };
    Some(action)
}
