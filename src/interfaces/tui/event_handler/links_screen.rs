//! Event handlers for the links screen and its filter bar

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen, FilterField};
use crate::utils::parse_filter_date;

pub fn handle_links_screen(app: &mut App, key: KeyEvent) -> bool {
    if app.filter_editing {
        handle_filter_bar(app, key);
        return false;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::Enter | KeyCode::Char('s') => app.open_stats(),
        KeyCode::Char('c') => app.open_create(),
        KeyCode::Right | KeyCode::Char('n') => {
            if let Some(fetch) = app.links.next_page() {
                app.spawn_links(fetch);
            }
        }
        KeyCode::Left | KeyCode::Char('p') => {
            if let Some(fetch) = app.links.prev_page() {
                app.spawn_links(fetch);
            }
        }
        KeyCode::Char('r') => {
            let fetch = app.links.start_fetch();
            app.spawn_links(fetch);
            app.set_status("Refreshing…".to_string());
        }
        KeyCode::Char('f') => {
            app.filter_editing = true;
            app.filter_field = FilterField::From;
        }
        KeyCode::Char('d') => {
            let fetch = app.links.cycle_domain();
            let label = app.links.domain.clone().unwrap_or_else(|| "all".to_string());
            app.spawn_links(fetch);
            app.set_status(format!("Domain: {}", label));
        }
        KeyCode::Char('z') => {
            let next = match app.links.page_size {
                10 => 25,
                25 => 50,
                _ => 10,
            };
            let (from, to, domain) = (app.links.from, app.links.to, app.links.domain.clone());
            let fetch = app.links.apply_filters(from, to, domain, next);
            app.spawn_links(fetch);
            app.set_status(format!("Page size: {}", next));
        }
        KeyCode::Char('x') => {
            app.filter_from_input.clear();
            app.filter_to_input.clear();
            let fetch = app.links.reset_filters();
            app.spawn_links(fetch);
            app.set_status("Filters cleared".to_string());
        }
        KeyCode::Char('y') => app.copy_short_url(),
        KeyCode::Char('?') | KeyCode::Char('h') => app.switch_screen(CurrentScreen::Help),
        KeyCode::Char('q') => app.switch_screen(CurrentScreen::Exiting),
        _ => {}
    }
    false
}

fn handle_filter_bar(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.filter_editing = false,
        KeyCode::Tab => app.filter_field = app.filter_field.toggle(),
        KeyCode::Enter => apply_filter_bar(app),
        KeyCode::Backspace => {
            app.filter_input_mut().pop();
        }
        KeyCode::Char(c) => app.filter_input_mut().push(c),
        _ => {}
    }
}

/// Parse both date fields and reload from page 1. Bad input surfaces in
/// the status bar and issues no request.
fn apply_filter_bar(app: &mut App) {
    let from = match parse_optional(&app.filter_from_input, false) {
        Ok(from) => from,
        Err(e) => return app.set_error(e),
    };
    let to = match parse_optional(&app.filter_to_input, true) {
        Ok(to) => to,
        Err(e) => return app.set_error(e),
    };

    let (domain, page_size) = (app.links.domain.clone(), app.links.page_size);
    let fetch = app.links.apply_filters(from, to, domain, page_size);
    app.spawn_links(fetch);
    app.filter_editing = false;
    app.clear_messages();
}

fn parse_optional(
    input: &str,
    end_of_day: bool,
) -> Result<Option<chrono::DateTime<chrono::Utc>>, String> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_filter_date(input, end_of_day)
        .map(Some)
        .map_err(|e| e.format_simple())
}
