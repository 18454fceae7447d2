// Timetable preview
// Builds a timetable grid from a schedule feed file and prints it as text

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};

use classroom_timetable::models::grid::{Grid, GridCell};
use classroom_timetable::models::ui::ViewMode;
use classroom_timetable::services::feed::load_schedule_feed;
use classroom_timetable::services::grid::TimetableEngine;
use classroom_timetable::services::settings::SettingsService;

const CELL_WIDTH: usize = 14;
const USAGE: &str = "usage: timetable-preview <feed.json> [--day <Day>] [--room] [--config <path>]";

struct Args {
    feed: PathBuf,
    view: Option<ViewMode>,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut feed = None;
    let mut view = None;
    let mut config = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--day" => {
                let day = args.next().ok_or_else(|| anyhow!("--day needs a value"))?;
                view = Some(ViewMode::Day(Some(day)));
            }
            "--today" => view = Some(ViewMode::Day(None)),
            "--room" => view = Some(ViewMode::Room),
            "--week" => view = Some(ViewMode::Week),
            "--config" => {
                let path = args.next().ok_or_else(|| anyhow!("--config needs a value"))?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(anyhow!(USAGE)),
            other if feed.is_none() && !other.starts_with('-') => {
                feed = Some(PathBuf::from(other));
            }
            other => return Err(anyhow!("unexpected argument '{}'\n{}", other, USAGE)),
        }
    }

    Ok(Args {
        feed: feed.ok_or_else(|| anyhow!(USAGE))?,
        view,
        config,
    })
}

fn fit(text: &str) -> String {
    let clipped: String = text.chars().take(CELL_WIDTH).collect();
    format!("{:<width$}", clipped, width = CELL_WIDTH)
}

fn render_text(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.height() {
        let Some(cells) = grid.row(row) else {
            continue;
        };
        let line: Vec<String> = cells
            .iter()
            .map(|cell| match cell {
                GridCell::Header { text } => fit(text),
                GridCell::TimeLabel { label } => fit(label),
                GridCell::Empty => fit("."),
                GridCell::Occupied(cell) if cell.hidden => fit("  |"),
                GridCell::Occupied(cell) if cell.is_merge_head() => fit(&format!(
                    "{} ({})",
                    cell.content.subject, cell.span_rows
                )),
                GridCell::Occupied(cell) => fit(&cell.content.subject),
            })
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let settings_service = match args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()
            .ok_or_else(|| anyhow!("no configuration directory available; pass --config"))?,
    };
    let settings = settings_service.load()?;
    let view = args.view.unwrap_or_else(|| settings.view_mode());

    let engine = TimetableEngine::for_view(&settings, &view)
        .context("invalid timetable configuration")?;
    let entries = load_schedule_feed(&args.feed)?;
    let outcome = engine.build_view(&entries, &view);

    print!("{}", render_text(&outcome.grid));
    let problems = outcome.problems().count();
    if problems > 0 {
        log::warn!("{} schedule entries could not be shown as-is", problems);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
