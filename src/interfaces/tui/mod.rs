//! Terminal User Interface (TUI) module
//!
//! Interactive front-end: the shorten form on top, the paginated list below

use std::io;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

pub mod app;
pub mod constants;
pub mod event_handler;
pub mod ui;

use crate::controller::Controller;
use crate::errors::ShortenerError;
use app::App;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(controller: Controller, tick_rate: Duration) -> Result<(), ShortenerError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting TUI against {}", controller.api_name());

    let mut app = App::new(controller);
    app.mount().await;
    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("TUI exited with error: {}", err);
    }
    res
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), ShortenerError> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key).await
        {
            return Ok(());
        }

        app.controller.tick(Instant::now());
    }
}
