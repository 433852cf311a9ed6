//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - links_screen: the main table and its filter bar
//! - stats_screen: per-link statistics and the custom period form
//! - create_screen: the batch creation form
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyEvent;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod create_screen;
mod links_screen;
mod misc_screens;
mod stats_screen;

use create_screen::*;
use links_screen::*;
use misc_screens::*;
use stats_screen::*;

/// Handle keyboard input based on current screen.
/// Returns true when the application should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match app.current_screen {
        CurrentScreen::Links => handle_links_screen(app, key),
        CurrentScreen::Stats => handle_stats_screen(app, key),
        CurrentScreen::Create => handle_create_screen(app, key),
        CurrentScreen::Help => handle_help_screen(app, key),
        CurrentScreen::Exiting => handle_exiting_screen(app, key),
    }
}
