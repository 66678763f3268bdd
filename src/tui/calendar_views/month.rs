use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use duty_rota::{
    app::AppState,
    ui::{month_view, theme::Theme},
};

const CELL_WIDTH: usize = 10;

pub fn render(f: &mut Frame, app: &AppState, today: NaiveDate, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app, today);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(layout.month.label(), Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|d| Span::styled(format!(" {:<width$}", d, width = CELL_WIDTH - 1), Style::default().fg(app.theme.weekday_header)))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();
        let mut duty_spans = Vec::new();

        for day_cell in &week.days {
            let Some(day) = day_cell.cell.day else {
                day_spans.push(Span::styled(" ".repeat(CELL_WIDTH), Style::default().fg(app.theme.blank_cell)));
                duty_spans.push(Span::raw(" ".repeat(CELL_WIDTH)));
                continue;
            };

            let marker = if day_cell.is_rotation_start { "●" } else { " " };
            let day_text = format!(" {:>2}{}{:<pad$}", day, marker, "", pad = CELL_WIDTH - 4);

            let mut style = Style::default();
            if day_cell.is_today {
                style = style.bg(app.theme.today).fg(Color::White).add_modifier(Modifier::BOLD);
            } else if day_cell.is_rotation_start {
                style = style.fg(app.theme.rotation_start).add_modifier(Modifier::BOLD);
            }
            day_spans.push(Span::styled(day_text, style));

            match &day_cell.cell.person {
                Some(person) => {
                    let name: String = person.chars().take(CELL_WIDTH - 2).collect();
                    duty_spans.push(Span::raw(" "));
                    duty_spans.push(Span::styled(
                        format!("{:<width$}", name, width = CELL_WIDTH - 2),
                        Style::default().fg(Theme::person_color(person)).bg(Theme::person_tint(person)),
                    ));
                    duty_spans.push(Span::raw(" "));
                }
                None => duty_spans.push(Span::raw(" ".repeat(CELL_WIDTH))),
            }
        }

        lines.push(Line::from(day_spans));
        lines.push(Line::from(duty_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("h/l", Style::default().fg(Color::Cyan)),
        Span::raw(" = Prev/Next month | "),
        Span::styled("t", Style::default().fg(Color::Cyan)),
        Span::raw(" = This month | "),
        Span::styled("●", Style::default().fg(app.theme.rotation_start)),
        Span::raw(" = Rotation start"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
