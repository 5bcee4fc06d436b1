//! TAPI - terminal browser for a catalog of API endpoints
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - state machine processing key events
//!
//! One event is handled to completion before the next is awaited.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::prelude::*;
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use tapi::constants::{APP_VERSION, LOG_DIR_NAME, LOG_FILE_NAME};
use tapi::messages::ui_events::key_to_ui_event;
use tapi::{ui, AppState, Control};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Stdout belongs to the TUI, so logs go to a file
    let _log_guard = init_logging();
    info!(version = APP_VERSION, "starting");

    // Terminal setup
    enable_raw_mode().context("failed to enable raw mode")?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;

    let mut state = AppState::new();
    let result = run_ui_loop(&mut terminal, &mut state).await;

    match &result {
        Ok(()) => info!("exiting"),
        Err(err) => error!("error running program: {err:#}"),
    }
    result
}

/// Set up file logging. Returns `None` if the log file cannot be created;
/// the browser still runs, just without logs.
fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir).ok()?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&dir)
        .ok()?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}

fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR_NAME)
}

/// Draw, wait for the next terminal event, apply it, repeat
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    state: &mut AppState,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let mut render_state = state.to_render_state();

    loop {
        terminal
            .draw(|f| ui::draw(f, &render_state))
            .context("failed to draw frame")?;

        let event = match events.next().await {
            Some(event) => event.context("failed to read terminal event")?,
            None => bail!("terminal event stream closed"),
        };

        match event {
            Event::Key(key) => {
                let Some(ui_event) = key_to_ui_event(key) else {
                    continue;
                };
                if state.handle_event(ui_event) == Control::Quit {
                    break;
                }
                render_state = state.to_render_state();
            }
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            _ => {}
        }
    }

    Ok(())
}
