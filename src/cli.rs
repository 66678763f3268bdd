use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use chrono::NaiveDate;

use duty_rota::{
    app::AppState,
    schedule::dates::today,
    storage::config::Config,
    ui::month_view::{self, CalendarCell, YearMonth},
};

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Interactive,
    Agenda(NaiveDate),
    Month { month: YearMonth, json: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub mode: CliMode,
    pub config_path: Option<PathBuf>,
}

pub const USAGE: &str = "Usage: duty-rota [--agenda [YYYY/MM/DD]] [--month [YYYY-MM]] [--json] [--config PATH]";

pub fn parse_cli_mode() -> Result<CliArgs, String> {
    parse_args(env::args().skip(1), today())
}

fn parse_args<I>(args: I, today: NaiveDate) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut agenda_date = None;
    let mut month = None;
    let mut json = false;
    let mut config_path = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--agenda" => {
                let target_date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y/%m/%d")
                        .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", date_str))?,
                    None => today,
                };
                agenda_date = Some(target_date);
            }
            "--month" => {
                let target_month = match args.next_if(|next| !next.starts_with("--")) {
                    Some(month_str) => month_str.parse::<YearMonth>()?,
                    None => YearMonth::from_date(today),
                };
                month = Some(target_month);
            }
            "--json" => {
                json = true;
            }
            "--config" => {
                let path = args.next().ok_or_else(|| "--config requires a path".to_string())?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    let mode = match (agenda_date, month) {
        (Some(_), Some(_)) => return Err("--agenda and --month cannot be combined".to_string()),
        (Some(date), None) => CliMode::Agenda(date),
        (None, Some(month)) => CliMode::Month { month, json },
        (None, None) if json => return Err("--json requires --month".to_string()),
        (None, None) => CliMode::Interactive,
    };

    Ok(CliArgs { mode, config_path })
}

pub fn load_config(path: Option<&PathBuf>) -> Result<Config, io::Error> {
    let result = match path {
        Some(path) => Config::load_or_create_at(path),
        None => Config::load_or_create(),
    };
    result.map_err(|e| io::Error::other(e.to_string()))
}

pub fn run_agenda_mode(config: &Config, date: NaiveDate) -> Result<(), io::Error> {
    let state = AppState::from_config(config, date);
    println!("{}", format_agenda_text(&state, date));
    Ok(())
}

fn format_agenda_text(state: &AppState, date: NaiveDate) -> String {
    let rotation = state.rotation();
    let mut lines = vec![format!("Duty – {}", date.format("%A, %B %d, %Y")), String::new()];

    match (rotation.on_duty(date), rotation.bounds_of(date)) {
        (Some(person), Some((first, last))) => {
            lines.push(format!("On duty: {}", person));
            lines.push(format!(
                "Period: {} – {}",
                first.format("%b %-d, %Y"),
                last.format("%b %-d, %Y")
            ));
        }
        _ if state.roster.is_empty() => lines.push("No one is in the rotation.".to_string()),
        _ => lines.push(format!(
            "No one on duty; rotation starts {}.",
            state.rotation_start().format("%b %-d, %Y")
        )),
    }

    lines.join("\n")
}

pub fn run_month_mode(config: &Config, month: YearMonth, json: bool) -> Result<(), io::Error> {
    let state = AppState::from_config(config, today());
    let cells = state.build(month);

    if json {
        let output = serde_json::to_string_pretty(&cells).map_err(io::Error::other)?;
        println!("{}", output);
        return Ok(());
    }

    display_with_pager(&format_month_text(month, &cells))
}

const CELL_WIDTH: usize = 10;

fn format_month_text(month: YearMonth, cells: &[CalendarCell]) -> String {
    let mut lines = vec![month.label(), String::new()];

    lines.push(
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .iter()
            .map(|d| format!("{:<width$}", d, width = CELL_WIDTH))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );

    for row in month_view::weeks(cells) {
        let days: String = row
            .iter()
            .map(|cell| match cell.day {
                Some(day) => format!("{:<width$}", day, width = CELL_WIDTH),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        let people: String = row
            .iter()
            .map(|cell| {
                let name = cell.person.as_deref().unwrap_or("");
                format!("{:<width$}", truncate_to_width(name, CELL_WIDTH - 1), width = CELL_WIDTH)
            })
            .collect();
        lines.push(days.trim_end().to_string());
        lines.push(people.trim_end().to_string());
    }

    lines.join("\n")
}

fn truncate_to_width(line: &str, width: usize) -> String {
    if width > 0 && line.chars().count() > width {
        let mut truncated = line.chars().take(width.saturating_sub(1)).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        line.to_string()
    }
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            drop(child.stdin.take());
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}
