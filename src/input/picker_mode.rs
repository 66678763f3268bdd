use crossterm::event::KeyCode;

use crate::app::AppState;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Enter => state.apply_date_picker(),
        KeyCode::Esc | KeyCode::Char('q') => state.cancel_date_picker(),
        _ => {
            let Some(picker) = state.date_picker.as_mut() else {
                return;
            };
            match key {
                KeyCode::Char('h') | KeyCode::Left => picker.move_days(-1),
                KeyCode::Char('l') | KeyCode::Right => picker.move_days(1),
                KeyCode::Char('k') | KeyCode::Up => picker.move_days(-7),
                KeyCode::Char('j') | KeyCode::Down => picker.move_days(7),
                KeyCode::Char('{') => picker.previous_month(),
                KeyCode::Char('}') => picker.next_month(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Mode;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn picker_state() -> AppState {
        let mut state = AppState::new(vec!["A".to_string()], date(2025, 3, 17), date(2025, 3, 17));
        state.toggle_date_picker();
        state
    }

    #[test]
    fn l_then_enter_snaps_tuesday_forward() {
        let mut state = picker_state();

        handle_key(KeyCode::Char('l'), &mut state);
        handle_key(KeyCode::Enter, &mut state);

        assert_eq!(state.rotation_start(), date(2025, 3, 24));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn j_moves_selection_one_week() {
        let mut state = picker_state();

        handle_key(KeyCode::Char('j'), &mut state);

        assert_eq!(state.date_picker.as_ref().unwrap().selected, date(2025, 3, 24));
    }

    #[test]
    fn right_brace_changes_picker_month_only() {
        let mut state = picker_state();

        handle_key(KeyCode::Char('}'), &mut state);

        assert_eq!(state.date_picker.as_ref().unwrap().selected, date(2025, 4, 17));
        assert_eq!(state.rotation_start(), date(2025, 3, 17));
    }

    #[test]
    fn esc_cancels_without_change() {
        let mut state = picker_state();
        handle_key(KeyCode::Char('j'), &mut state);

        handle_key(KeyCode::Esc, &mut state);

        assert_eq!(state.rotation_start(), date(2025, 3, 17));
        assert!(state.date_picker.is_none());
    }
}
