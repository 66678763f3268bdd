use chrono::NaiveDate;

use crate::schedule::dates::{monday_of_week, nearest_monday_on_or_after, today};
use crate::schedule::{Roster, Rotation};
use crate::storage::config::Config;
use crate::ui::date_picker::DatePicker;
use crate::ui::month_view::{self, CalendarCell, YearMonth};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
    Picker,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Session state for one run: roster, rotation anchor and the month on screen.
pub struct AppState {
    pub mode: Mode,
    pub roster: Roster,
    rotation_start: NaiveDate,
    pub display_month: YearMonth,
    pub original_start: NaiveDate,
    pub date_picker_enabled: bool,
    pub date_picker: Option<DatePicker>,
    pub new_person: String,
    pub selected_person: usize,
    pub command_buffer: String,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
}

impl AppState {
    pub fn new(participants: Vec<String>, start: NaiveDate, today: NaiveDate) -> Self {
        let start = monday_of_week(start);
        Self {
            mode: Mode::Normal,
            roster: Roster::new(participants),
            rotation_start: start,
            display_month: YearMonth::from_date(today),
            original_start: start,
            date_picker_enabled: true,
            date_picker: None,
            new_person: String::new(),
            selected_person: 0,
            command_buffer: String::new(),
            status: None,
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
        }
    }

    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        let mut state = Self::new(config.rotation.participants.clone(), config.rotation.start_date, today)
            .with_theme(Theme::get_by_name(&config.ui.theme));
        state.date_picker_enabled = config.ui.date_picker;
        state
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn set_participants(&mut self, participants: Vec<String>) {
        self.roster.replace(participants);
        self.clamp_selection();
    }

    /// Non-Monday dates move forward to the next Monday.
    pub fn set_rotation_start(&mut self, date: NaiveDate) {
        let monday = nearest_monday_on_or_after(date);
        if monday != date {
            tracing::info!("Start date {} adjusted to Monday {}", date, monday);
        }
        self.rotation_start = monday;
        tracing::info!("Rotation start set to {}", monday);
    }

    pub fn set_display_month(&mut self, month: YearMonth) {
        self.display_month = month;
    }

    /// Always a Monday: every setter snaps before storing.
    pub fn rotation_start(&self) -> NaiveDate {
        self.rotation_start
    }

    pub fn rotation(&self) -> Rotation<'_> {
        Rotation::new(self.roster.names(), self.rotation_start)
    }

    pub fn resolve(&self, date: NaiveDate) -> Option<&str> {
        self.rotation().on_duty(date)
    }

    pub fn build(&self, month: YearMonth) -> Vec<CalendarCell> {
        let rotation = self.rotation();
        month_view::build(month, |date| rotation.on_duty(date).map(str::to_string))
    }

    pub fn current_duty_on(&self, today: NaiveDate) -> Option<&str> {
        self.resolve(today)
    }

    pub fn current_duty(&self) -> Option<&str> {
        self.current_duty_on(today())
    }

    pub fn previous_month(&mut self) {
        self.display_month = self.display_month.pred();
    }

    pub fn next_month(&mut self) {
        self.display_month = self.display_month.succ();
    }

    pub fn jump_to_month_of(&mut self, date: NaiveDate) {
        self.display_month = YearMonth::from_date(date);
    }

    /// Takes the name from the input buffer. The buffer is cleared only on success.
    pub fn add_person(&mut self) -> bool {
        let added = self.roster.add(&self.new_person);
        if added {
            self.new_person.clear();
        }
        added
    }

    pub fn remove_person(&mut self, index: usize) -> Option<String> {
        let removed = self.roster.remove_at(index);
        self.clamp_selection();
        removed
    }

    pub fn remove_selected_person(&mut self) -> Option<String> {
        self.remove_person(self.selected_person)
    }

    pub fn select_next_person(&mut self) {
        if self.selected_person + 1 < self.roster.len() {
            self.selected_person += 1;
        }
    }

    pub fn select_previous_person(&mut self) {
        self.selected_person = self.selected_person.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected_person = self.selected_person.min(self.roster.len().saturating_sub(1));
    }

    pub fn start_from_current_week(&mut self, today: NaiveDate) {
        let monday = monday_of_week(today);
        self.rotation_start = monday;
        self.sync_open_picker();
        tracing::info!("Rotation restarted from current week ({})", monday);
    }

    pub fn reset_to_original(&mut self) {
        self.rotation_start = self.original_start;
        self.sync_open_picker();
        tracing::info!("Rotation start reset to {}", self.original_start);
    }

    fn sync_open_picker(&mut self) {
        if let Some(picker) = self.date_picker.as_mut() {
            picker.select(self.rotation_start);
        }
    }

    pub fn toggle_date_picker(&mut self) {
        if !self.date_picker_enabled {
            return;
        }
        if self.date_picker.take().is_some() {
            self.mode = Mode::Normal;
        } else {
            self.date_picker = Some(DatePicker::open_at(self.rotation_start));
            self.mode = Mode::Picker;
        }
    }

    pub fn apply_date_picker(&mut self) {
        if let Some(picker) = self.date_picker.take() {
            self.set_rotation_start(picker.selected);
        }
        self.mode = Mode::Normal;
    }

    pub fn cancel_date_picker(&mut self) {
        self.date_picker = None;
        self.mode = Mode::Normal;
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Error(message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    fn abc_state() -> AppState {
        AppState::new(names(&["A", "B", "C"]), date(2025, 1, 6), date(2025, 1, 15))
    }

    #[test]
    fn new_state_starts_in_normal_mode() {
        assert_eq!(abc_state().mode, Mode::Normal);
    }

    #[test]
    fn new_state_displays_month_of_today() {
        assert_eq!(abc_state().display_month, YearMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn configured_start_snaps_back_to_monday() {
        let state = AppState::new(names(&["A"]), date(2025, 3, 12), date(2025, 3, 12));
        assert_eq!(state.rotation_start, date(2025, 3, 10));
        assert_eq!(state.original_start, date(2025, 3, 10));
    }

    #[test]
    fn from_config_applies_ui_settings() {
        let mut config = Config::default();
        config.ui.theme = "gruvbox".to_string();
        config.ui.date_picker = false;

        let state = AppState::from_config(&config, date(2025, 4, 1));

        assert_eq!(state.theme.name, "gruvbox");
        assert!(!state.date_picker_enabled);
        assert_eq!(state.rotation_start, date(2025, 3, 17));
    }

    #[test]
    fn set_rotation_start_snaps_forward_to_monday() {
        let mut state = abc_state();

        state.set_rotation_start(date(2025, 1, 8));

        assert_eq!(state.rotation_start, date(2025, 1, 13));
    }

    #[test]
    fn current_duty_follows_resolver() {
        let state = abc_state();

        assert_eq!(state.current_duty_on(date(2025, 1, 20)), Some("B"));
        assert_eq!(state.current_duty_on(date(2025, 1, 1)), None);
    }

    #[test]
    fn current_duty_uses_local_today() {
        let state = AppState::new(names(&["A", "B", "C"]), date(2020, 1, 6), today());

        assert_eq!(state.current_duty(), state.current_duty_on(today()));
        assert!(state.current_duty().is_some());
    }

    #[test]
    fn rotation_start_is_monday_after_every_setter() {
        let mut state = abc_state();
        let today = date(2025, 5, 18);

        for day in 0..14 {
            let target = date(2025, 4, 1) + chrono::Days::new(day);
            state.set_rotation_start(target);
            assert!(crate::schedule::dates::is_monday(state.rotation_start()), "set {target}");
        }
        state.start_from_current_week(today);
        assert!(crate::schedule::dates::is_monday(state.rotation_start()));
        state.reset_to_original();
        assert!(crate::schedule::dates::is_monday(state.rotation_start()));
    }

    #[test]
    fn build_uses_display_roster() {
        let state = abc_state();
        let cells = state.build(YearMonth::new(2025, 1).unwrap());

        let jan_20 = cells.iter().find(|c| c.date == Some(date(2025, 1, 20))).unwrap();
        let jan_2 = cells.iter().find(|c| c.date == Some(date(2025, 1, 2))).unwrap();

        assert_eq!(jan_20.person.as_deref(), Some("B"));
        assert_eq!(jan_2.person, None);
    }

    #[test]
    fn removing_first_person_reassigns_immediately() {
        let mut state = abc_state();

        state.remove_person(0);

        assert_eq!(state.roster.names(), names(&["B", "C"]).as_slice());
        assert_eq!(state.resolve(date(2025, 2, 3)), Some("B"));
    }

    #[test]
    fn add_person_clears_buffer_on_success() {
        let mut state = abc_state();
        state.new_person = "  Dana ".to_string();

        assert!(state.add_person());

        assert_eq!(state.new_person, "");
        assert_eq!(state.roster.names().last().map(String::as_str), Some("Dana"));
    }

    #[test]
    fn add_person_ignores_whitespace() {
        let mut state = abc_state();
        state.new_person = "   ".to_string();

        assert!(!state.add_person());

        assert_eq!(state.roster.len(), 3);
    }

    #[test]
    fn selection_is_clamped_after_removal() {
        let mut state = abc_state();
        state.selected_person = 2;

        state.remove_selected_person();

        assert_eq!(state.selected_person, 1);
    }

    #[test]
    fn month_navigation_wraps_year() {
        let mut state = abc_state();

        state.previous_month();

        assert_eq!(state.display_month, YearMonth::new(2024, 12).unwrap());
        state.next_month();
        state.next_month();
        assert_eq!(state.display_month, YearMonth::new(2025, 2).unwrap());
    }

    #[test]
    fn start_from_current_week_uses_this_monday() {
        let mut state = abc_state();

        state.start_from_current_week(date(2025, 5, 18));

        assert_eq!(state.rotation_start, date(2025, 5, 12));
    }

    #[test]
    fn reset_restores_configured_start() {
        let mut state = abc_state();
        state.set_rotation_start(date(2025, 6, 2));

        state.reset_to_original();

        assert_eq!(state.rotation_start, date(2025, 1, 6));
    }

    #[test]
    fn picker_apply_commits_next_monday() {
        let mut state = abc_state();
        state.toggle_date_picker();
        assert_eq!(state.mode, Mode::Picker);

        state.date_picker.as_mut().unwrap().select(date(2025, 2, 5));
        state.apply_date_picker();

        assert_eq!(state.rotation_start, date(2025, 2, 10));
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.date_picker.is_none());
    }

    #[test]
    fn picker_cancel_keeps_start() {
        let mut state = abc_state();
        state.toggle_date_picker();
        state.date_picker.as_mut().unwrap().select(date(2025, 2, 5));

        state.cancel_date_picker();

        assert_eq!(state.rotation_start, date(2025, 1, 6));
    }

    #[test]
    fn picker_stays_closed_when_disabled() {
        let mut state = abc_state();
        state.date_picker_enabled = false;

        state.toggle_date_picker();

        assert!(state.date_picker.is_none());
        assert_eq!(state.mode, Mode::Normal);
    }
}
