//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::path::Path;
use std::time::Instant;
use tictac_tui::terminal::{self, Tui};
use tictac_tui::{App, Cli, TuiConfig, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    init_tracing(config.log_file())?;

    info!(?config, "Starting tictac");

    terminal::install_panic_hook();
    let mut terminal = terminal::setup()?;
    let res = run_app(&mut terminal, App::new(config));
    terminal::restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting tictac");
    res
}

/// Logs go to a file so they never draw over the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;
    Ok(())
}

/// Draw, wait for input until the next tick, repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    let tick_rate = app.config().tick_rate();
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        let area = terminal.draw(|f| ui::draw(f, &app))?.area;
        app.set_layout(ui::layout(area));

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
