//! Event handlers for the help and exit-confirmation screens

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::App;

pub fn handle_help_screen(app: &mut App, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.go_back();
    }
    false
}

pub fn handle_exiting_screen(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.go_back(),
        _ => {}
    }
    false
}
