use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::ui::month_view::YearMonth;
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Add(String),
    /// One-based position as shown in the roster panel.
    Remove(usize),
    Start(NaiveDate),
    Goto(YearMonth),
    Theme(String),
    Reset,
    Current,
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "reset" => Command::Reset,
        "current" => Command::Current,
        "add" => {
            if parts.len() < 2 {
                Command::Error("add requires a name".to_string())
            } else {
                Command::Add(parts[1..].join(" "))
            }
        }
        "rm" | "remove" => match parts.get(1).map(|p| p.parse::<usize>()) {
            Some(Ok(position)) if position > 0 => Command::Remove(position),
            Some(_) => Command::Error(format!("Invalid position: {}", parts[1])),
            None => Command::Error("rm requires a position".to_string()),
        },
        "start" => {
            if parts.len() < 2 {
                Command::Error("start requires a date argument".to_string())
            } else if let Ok(date) = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d") {
                Command::Start(date)
            } else {
                Command::Error(format!("Invalid date format: {}", parts[1]))
            }
        }
        "goto" => match parts.get(1) {
            Some(arg) => arg.parse::<YearMonth>().map(Command::Goto).unwrap_or_else(Command::Error),
            None => Command::Error("goto requires a month argument".to_string()),
        },
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

/// Applies a parsed command. Returns `true` when the session should end.
pub fn execute(command: Command, state: &mut AppState, today: NaiveDate) -> bool {
    match command {
        Command::Quit => return true,
        Command::Add(name) => {
            if state.roster.add(&name) {
                state.set_info(format!("Added {}", name.trim()));
            }
        }
        Command::Remove(position) => match position.checked_sub(1).and_then(|i| state.remove_person(i)) {
            Some(name) => state.set_info(format!("Removed {}", name)),
            None => state.set_error(format!("No participant at position {}", position)),
        },
        Command::Start(_) | Command::Reset | Command::Current if !state.date_picker_enabled => {
            state.set_error("Changing the rotation start is disabled");
        }
        Command::Start(date) => {
            state.set_rotation_start(date);
            state.set_info(format!("Rotation starts {}", state.rotation_start().format("%b %-d, %Y")));
        }
        Command::Goto(month) => state.set_display_month(month),
        Command::Theme(name) => state.theme = Theme::get_by_name(&name),
        Command::Reset => state.reset_to_original(),
        Command::Current => state.start_from_current_week(today),
        Command::Help => state.show_help = true,
        Command::Error(message) => state.set_error(message),
    }
    false
}

/// Handles a key in command mode. Returns `true` when the session should end.
pub fn handle_key(key: KeyCode, state: &mut AppState, today: NaiveDate) -> bool {
    match key {
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            execute(command, state, today)
        }
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Normal;
            }
            false
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            false
        }
        _ => false,
    }
}
