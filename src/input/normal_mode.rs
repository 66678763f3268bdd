use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};

/// Handles a key in normal mode. `today` anchors the "current" shortcuts.
pub fn handle_key(key: KeyCode, state: &mut AppState, today: NaiveDate) {
    match key {
        KeyCode::Char('h') | KeyCode::Char('{') | KeyCode::Left => state.previous_month(),
        KeyCode::Char('l') | KeyCode::Char('}') | KeyCode::Right => state.next_month(),
        KeyCode::Char('t') => state.jump_to_month_of(today),
        KeyCode::Char('j') | KeyCode::Down => state.select_next_person(),
        KeyCode::Char('k') | KeyCode::Up => state.select_previous_person(),
        KeyCode::Char('a') => enter_insert_mode(state),
        KeyCode::Char('x') => remove_selected(state),
        KeyCode::Char('p') => state.toggle_date_picker(),
        KeyCode::Char('c') => {
            if state.date_picker_enabled {
                state.start_from_current_week(today);
            }
        }
        KeyCode::Char('r') => {
            if state.date_picker_enabled {
                state.reset_to_original();
            }
        }
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}

fn enter_insert_mode(state: &mut AppState) {
    state.new_person.clear();
    state.mode = Mode::Insert;
}

fn remove_selected(state: &mut AppState) {
    if let Some(name) = state.remove_selected_person() {
        state.set_info(format!("Removed {}", name));
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::month_view::YearMonth;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn state() -> AppState {
        let people = ["A", "B", "C"].iter().map(|n| n.to_string()).collect();
        AppState::new(people, date(2025, 1, 6), date(2025, 1, 15))
    }

    #[test]
    fn h_key_moves_to_previous_month() {
        let mut s = state();

        handle_key(KeyCode::Char('h'), &mut s, date(2025, 1, 15));

        assert_eq!(s.display_month, YearMonth::new(2024, 12).unwrap());
    }

    #[test]
    fn right_brace_moves_to_next_month() {
        let mut s = state();

        handle_key(KeyCode::Char('}'), &mut s, date(2025, 1, 15));

        assert_eq!(s.display_month, YearMonth::new(2025, 2).unwrap());
    }

    #[test]
    fn t_key_returns_to_current_month() {
        let mut s = state();
        s.set_display_month(YearMonth::new(2030, 7).unwrap());

        handle_key(KeyCode::Char('t'), &mut s, date(2025, 1, 15));

        assert_eq!(s.display_month, YearMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn a_key_enters_insert_mode() {
        let mut s = state();

        handle_key(KeyCode::Char('a'), &mut s, date(2025, 1, 15));

        assert_eq!(s.mode, Mode::Insert);
    }

    #[test]
    fn x_key_removes_selected_person() {
        let mut s = state();
        handle_key(KeyCode::Char('j'), &mut s, date(2025, 1, 15));

        handle_key(KeyCode::Char('x'), &mut s, date(2025, 1, 15));

        assert_eq!(s.roster.names(), ["A".to_string(), "C".to_string()].as_slice());
    }

    #[test]
    fn x_key_on_empty_roster_is_harmless() {
        let mut s = state();
        s.set_participants(Vec::new());

        handle_key(KeyCode::Char('x'), &mut s, date(2025, 1, 15));

        assert!(s.roster.is_empty());
        assert!(s.status.is_none());
    }

    #[test]
    fn c_key_starts_from_current_week() {
        let mut s = state();

        handle_key(KeyCode::Char('c'), &mut s, date(2025, 3, 20));

        assert_eq!(s.rotation_start(), date(2025, 3, 17));
    }

    #[test]
    fn shortcuts_are_ignored_without_date_picker() {
        let mut s = state();
        s.date_picker_enabled = false;

        handle_key(KeyCode::Char('c'), &mut s, date(2025, 3, 20));
        handle_key(KeyCode::Char('p'), &mut s, date(2025, 3, 20));

        assert_eq!(s.rotation_start(), date(2025, 1, 6));
        assert_eq!(s.mode, Mode::Normal);
    }

    #[test]
    fn p_key_opens_picker() {
        let mut s = state();

        handle_key(KeyCode::Char('p'), &mut s, date(2025, 1, 15));

        assert_eq!(s.mode, Mode::Picker);
        assert!(s.date_picker.is_some());
    }

    #[test]
    fn colon_enters_command_mode() {
        let mut s = state();

        handle_key(KeyCode::Char(':'), &mut s, date(2025, 1, 15));

        assert_eq!(s.mode, Mode::Command);
        assert_eq!(s.command_buffer, ":");
    }
}
