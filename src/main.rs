use std::io;

use tracing_subscriber::EnvFilter;

mod cli;
use cli::{load_config, parse_cli_mode, run_agenda_mode, run_month_mode, CliMode, USAGE};
mod tui;
use tui::run_tui;

use duty_rota::storage::config::Config;

fn main() -> Result<(), io::Error> {
    setup_logging();

    let args = match parse_cli_mode() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let config = match load_config(args.config_path.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            tracing::error!("Failed to load configuration: {}", e);
            return Ok(());
        }
    };

    match args.mode {
        CliMode::Agenda(date) => run_agenda_mode(&config, date),
        CliMode::Month { month, json } => run_month_mode(&config, month, json),
        CliMode::Interactive => run_tui(&config),
    }
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "duty-rota.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("duty-rota started");
}
