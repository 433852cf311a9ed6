// UI submodules
mod common;
mod create_screen;
mod exiting;
mod help;
mod links_screen;
mod stats_screen;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_screen {
        CurrentScreen::Links => links_screen::draw_links_screen(frame, app, main_chunks[1]),
        CurrentScreen::Stats => stats_screen::draw_stats_screen(frame, app, main_chunks[1]),
        CurrentScreen::Create => create_screen::draw_create_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => help::draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => exiting::draw_exiting_screen(frame, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
