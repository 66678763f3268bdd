use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Enter => {
            if state.add_person() {
                let added = state.roster.names().last().cloned().unwrap_or_default();
                state.set_info(format!("Added {}", added));
            }
            state.new_person.clear();
            state.mode = Mode::Normal;
        }
        KeyCode::Esc => {
            state.new_person.clear();
            state.mode = Mode::Normal;
        }
        KeyCode::Backspace => {
            state.new_person.pop();
        }
        KeyCode::Char(c) => {
            state.new_person.push(c);
        }
        _ => {}
    }
}
