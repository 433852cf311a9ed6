//! Terminal dashboard (TUI)
//!
//! Interactive view over the shortener API: links table, per-link click
//! statistics with a daily chart, and a batch creation form.
//!
//! The event loop never blocks on the network: fetches run as spawned
//! tasks and send their results through a channel the loop drains
//! between input polls, so a slow server leaves the UI responsive and
//! out-of-order responses are handled by the view layer's sequence
//! guards.

use std::io;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
mod event_handler;
mod ui;

use app::App;
use ui::ui;

/// Input poll interval; also the cadence for draining fetch results
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI application
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new();
    app.bootstrap();
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    std::io::Error: From<<B as Backend>::Error>,
{
    loop {
        // Fold in any fetches that completed since the last frame
        app.drain_events();

        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                let should_exit = event_handler::handle_key_event(app, key);

                if should_exit {
                    return Ok(());
                }
            }
        }
    }
}
