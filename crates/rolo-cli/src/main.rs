//! `rolo` — terminal address book backed by a local SQLite file.
//!
//! # Usage
//!
//! ```
//! rolo
//! rolo --database ~/contacts.sqlite --log-file /tmp/rolo.log
//! rolo --config ~/.config/rolo/config.toml
//! ```
//!
//! Exits with status 1 if the contact store cannot be opened.

mod app;
mod ui;

#[cfg(test)]
mod tests;

use std::{
  fs::OpenOptions,
  io,
  path::{Path, PathBuf},
  process::ExitCode,
  sync::Mutex,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rolo_core::ContactTable;
use rolo_store_sqlite::{DEFAULT_PATH, SqliteContactTable};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rolo", version, about = "Terminal address book")]
struct Args {
  /// Path to a TOML config file (database, log_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// SQLite database file; created on first run (default: contacts.sqlite).
  #[arg(short, long, env = "ROLO_DATABASE", value_name = "FILE")]
  database: Option<PathBuf>,

  /// Append logs to this file. Without it nothing is logged.
  #[arg(long, env = "ROLO_LOG_FILE", value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
  #[serde(default)]
  database: Option<PathBuf>,
  #[serde(default)]
  log_file: Option<PathBuf>,
}

/// Settings after merging flags, config file and defaults.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
  database: PathBuf,
  log_file: Option<PathBuf>,
}

impl Settings {
  /// CLI flags override the config file, which overrides defaults.
  fn resolve(args: Args, file: ConfigFile) -> Self {
    Self {
      database: args
        .database
        .or(file.database)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH)),
      log_file: args.log_file.or(file.log_file),
    }
  }
}

fn load_config_file(path: Option<&Path>) -> Result<ConfigFile> {
  let Some(path) = path else {
    return Ok(ConfigFile::default());
  };
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading config file {}", path.display()))?;
  toml::from_str(&raw).context("parsing config file")
}

/// Send `tracing` output to `path`. The terminal belongs to the UI, so logs
/// never go to stdout or stderr.
fn init_logging(path: &Path) -> Result<()> {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> ExitCode {
  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!("{err:#}");
      eprintln!("rolo: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run() -> Result<()> {
  let args = Args::parse();
  let file_cfg = load_config_file(args.config.as_deref())?;
  let settings = Settings::resolve(args, file_cfg);

  if let Some(path) = &settings.log_file {
    init_logging(path)?;
  }

  // Abort before touching the terminal if the store is unusable.
  let table = SqliteContactTable::open(&settings.database)?;
  tracing::info!(
    path = %settings.database.display(),
    contacts = table.list().len(),
    "starting"
  );
  let mut app = App::new(table);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  tracing::info!("shutting down");
  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop<T: ContactTable>(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<T>,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Blocks until the next terminal event; nothing else drives redraws.
    match event::read().context("reading terminal event")? {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          return Ok(());
        }
      }
      _ => {}
    }
  }
}
