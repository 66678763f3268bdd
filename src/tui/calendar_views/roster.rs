use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use duty_rota::{app::AppState, ui::theme::Theme};

pub fn render(f: &mut Frame, app: &AppState, today: NaiveDate, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Current duty: ", Style::default().add_modifier(Modifier::BOLD)),
            match app.current_duty_on(today) {
                Some(person) => Span::styled(person.to_string(), Style::default().fg(Theme::person_color(person)).add_modifier(Modifier::BOLD)),
                None => Span::styled("-", Style::default().fg(Color::DarkGray)),
            },
        ]),
        Line::from(vec![
            Span::raw("Rotation start (Monday): "),
            Span::styled(
                app.rotation_start().format("%b %-d, %Y").to_string(),
                Style::default().fg(app.theme.rotation_start),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current Rotation (Every 2 Weeks)", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if app.roster.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No people in rotation", Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        for (idx, person) in app.roster.names().iter().enumerate() {
            let is_selected = idx == app.selected_person;
            let cursor = if is_selected { ">" } else { " " };

            let mut name_style = Style::default().fg(Theme::person_color(person)).bg(Theme::person_tint(person));
            if is_selected {
                name_style = name_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }

            lines.push(Line::from(vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled(format!("{:>2}. ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled("●", Style::default().fg(Theme::person_color(person))),
                Span::raw(" "),
                Span::styled(person.as_str(), name_style),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("a", Style::default().fg(Color::Green)),
        Span::raw(" = Add | "),
        Span::styled("x", Style::default().fg(Color::Red)),
        Span::raw(" = Remove | "),
        Span::styled("j/k", Style::default().fg(Color::Cyan)),
        Span::raw(" = Select"),
    ]));

    if app.date_picker_enabled {
        lines.push(Line::from(vec![
            Span::styled("p", Style::default().fg(Color::Cyan)),
            Span::raw(" = Change date | "),
            Span::styled("c", Style::default().fg(Color::Cyan)),
            Span::raw(" = Current week | "),
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::raw(" = Reset"),
        ]));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" People in Rotation "));
    f.render_widget(content, area);
}
