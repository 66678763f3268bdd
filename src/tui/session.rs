use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use duty_rota::{
    app::{AppState, Mode},
    input::{command_mode, insert_mode, normal_mode, picker_mode},
    schedule::dates::today,
    storage::config::Config,
};
use crate::tui::presentation::ui;

pub fn run_tui(config: &Config) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::from_config(config, today());
    tracing::info!(
        "Session opened with {} participants, rotation start {}",
        app.roster.len(),
        app.rotation_start()
    );

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Session ended with error: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        let today = today();
        terminal.draw(|f| ui(f, app, today))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.mode {
                Mode::Normal => {
                    if app.show_help {
                        handle_help_keys(key.code, app);
                    } else {
                        app.status = None;
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            _ => normal_mode::handle_key(key.code, app, today),
                        }
                    }
                }
                Mode::Insert => insert_mode::handle_key(key.code, app),
                Mode::Command => {
                    if command_mode::handle_key(key.code, app, today) {
                        return Ok(());
                    }
                }
                Mode::Picker => picker_mode::handle_key(key.code, app),
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
