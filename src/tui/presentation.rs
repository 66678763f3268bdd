use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use duty_rota::app::{AppState, Mode, StatusMessage};
use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState, today: NaiveDate) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(main_chunks[1]);

    let title_text = format!("Cleaning Schedule Rotation - {:?} Mode", app.mode);

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    calendar_views::month::render(f, app, today, content_chunks[0]);
    calendar_views::roster::render(f, app, today, content_chunks[1]);

    let (status_text, status_color, alignment) = match (&app.mode, &app.status) {
        (Mode::Command, _) => (app.command_buffer.clone(), app.theme.command_mode, Alignment::Left),
        (Mode::Insert, _) => (
            format!("Add person: {}_", app.new_person),
            app.theme.command_mode,
            Alignment::Left,
        ),
        (_, Some(StatusMessage::Error(message))) => (message.clone(), app.theme.error, Alignment::Center),
        (_, Some(StatusMessage::Info(message))) => (message.clone(), app.theme.success, Alignment::Center),
        (_, None) => (
            format!(
                "People: {} | Start: {} | Press 'q' to quit, '?' for help",
                app.roster.len(),
                app.rotation_start().format("%b %-d, %Y")
            ),
            app.theme.status_bar,
            Alignment::Center,
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.date_picker.is_some() {
        dialogs::date_picker::render(f, app, today);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}
