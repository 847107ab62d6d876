//! Terminal setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, instrument};

/// The terminal the game draws on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen with mouse capture.
#[instrument]
pub fn setup() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Leaves the alternate screen and raw mode.
///
/// Works without a [`Tui`] handle so the panic hook can call it.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before the
/// previous hook prints the panic message.
pub fn install_panic_hook() {
    install_panic_hook_with(|| {
        if let Err(err) = restore() {
            error!(error = ?err, "Failed to restore terminal after panic");
        }
    });
}

/// Installs a panic hook that runs `cleanup` before the previous hook.
pub fn install_panic_hook_with(cleanup: impl Fn() + Send + Sync + 'static) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        cleanup();
        previous(info);
    }));
}
