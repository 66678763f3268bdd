use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use duty_rota::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 60.min(area.width);
    let help_height = 23.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let mut help_text = vec![
        Line::from(vec![Span::styled("duty-rota Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Calendar:", Style::default().fg(app.theme.help_section))]),
        Line::from("  h/l, { / }  - Previous/next month"),
        Line::from("  t           - Jump to this month"),
        Line::from(""),
        Line::from(vec![Span::styled("People:", Style::default().fg(app.theme.help_section))]),
        Line::from("  a           - Add person (Enter to confirm)"),
        Line::from("  j/k         - Select person"),
        Line::from("  x           - Remove selected person"),
        Line::from(""),
    ];

    if app.date_picker_enabled {
        help_text.extend([
            Line::from(vec![Span::styled("Rotation start:", Style::default().fg(app.theme.help_section))]),
            Line::from("  p           - Change start date"),
            Line::from("  c           - Start from current week"),
            Line::from("  r           - Reset to configured date"),
            Line::from(""),
            Line::from(vec![Span::styled("Date picker:", Style::default().fg(app.theme.help_section))]),
            Line::from("  hjkl        - Move by day/week"),
            Line::from("  { / }       - Previous/next month"),
            Line::from("  Enter       - Apply (non-Mondays move to next Monday)"),
            Line::from("  Esc         - Cancel"),
            Line::from(""),
        ]);
    }

    help_text.push(Line::from(vec![Span::styled("Commands:", Style::default().fg(app.theme.help_section))]));
    help_text.extend(command_lines(app.date_picker_enabled).into_iter().map(Line::from));
    help_text.push(Line::from(""));

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}

/// Command reference; the rotation-start commands only when they are allowed.
fn command_lines(date_picker_enabled: bool) -> Vec<&'static str> {
    let mut lines = vec![
        "  :q          - Quit",
        "  :add NAME   - Add person",
        "  :rm N       - Remove person at position N",
    ];
    if date_picker_enabled {
        lines.push("  :start DATE - Set start (:start 2025-03-17)");
    }
    lines.push("  :goto MONTH - Show month (:goto 2025-12)");
    if date_picker_enabled {
        lines.extend([
            "  :reset      - Back to configured start",
            "  :current    - Start from current week",
        ]);
    }
    lines.extend([
        "  :theme      - Change theme (:theme nord)",
        "  :help       - Show this help",
    ]);
    lines
}
