use chrono::NaiveDate;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use duty_rota::{app::AppState, schedule::dates::is_monday, ui::month_view};

pub fn render(f: &mut Frame, app: &AppState, today: NaiveDate) {
    let Some(picker) = &app.date_picker else {
        return;
    };

    let area = f.size();
    let dialog_width = 36.min(area.width);
    let dialog_height = 16.min(area.height);
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: dialog_width,
        height: dialog_height,
    };

    f.render_widget(Clear, dialog_area);

    let mut lines = vec![
        Line::from(vec![Span::styled(
            format!("<  {}  >", picker.month.label()),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(
            ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
                .iter()
                .map(|d| Span::styled(format!(" {} ", d), Style::default().fg(app.theme.weekday_header)))
                .collect::<Vec<_>>(),
        ),
    ];

    let cells = picker.cells();
    for row in month_view::weeks(&cells) {
        let mut spans: Vec<Span> = row
            .iter()
            .map(|cell| {
                let (Some(day), Some(date)) = (cell.day, cell.date) else {
                    return Span::raw("    ");
                };

                let mut style = Style::default();
                if date == picker.selected {
                    style = style.bg(Color::Blue).fg(Color::White);
                } else if date == app.rotation_start() {
                    style = style.fg(app.theme.rotation_start).add_modifier(Modifier::UNDERLINED);
                } else if date == today {
                    style = style.fg(app.theme.today);
                }
                if is_monday(date) {
                    style = style.add_modifier(Modifier::BOLD);
                }

                Span::styled(format!(" {:>2} ", day), style)
            })
            .collect();
        // centered paragraph: keep the short last row aligned with the columns
        spans.extend((row.len()..7).map(|_| Span::raw("    ")));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Blue)),
        Span::raw(format!("{} {}", picker.selected.format("%b %-d"), picker.selection_hint())),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Apply | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" = Cancel"),
    ]));

    let dialog_paragraph = Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Rotation Start Date ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}
