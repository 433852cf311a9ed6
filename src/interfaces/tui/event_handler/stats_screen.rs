//! Event handlers for the statistics screen and the custom period form

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen, FilterField};
use crate::stats::Period;
use crate::utils::parse_filter_date;

pub fn handle_stats_screen(app: &mut App, key: KeyEvent) -> bool {
    if app.custom_editing {
        handle_custom_period(app, key);
        return false;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => app.close_stats(),
        KeyCode::Char('t') => set_quick_period(app, Period::Today),
        KeyCode::Char('w') => set_quick_period(app, Period::Week),
        KeyCode::Char('m') => set_quick_period(app, Period::Month),
        KeyCode::Char('a') => set_quick_period(app, Period::All),
        KeyCode::Char('u') => {
            app.custom_editing = true;
            app.custom_field = FilterField::From;
        }
        KeyCode::Right | KeyCode::Char('n') => {
            // Table page only; the chart keeps its snapshot
            if let Some(stats) = app.stats.as_mut() {
                let fetch = stats.next_page();
                let code = stats.code.clone();
                if let Some(fetch) = fetch {
                    app.spawn_stats(code, vec![fetch]);
                }
            }
        }
        KeyCode::Left | KeyCode::Char('p') => {
            if let Some(stats) = app.stats.as_mut() {
                let fetch = stats.prev_page();
                let code = stats.code.clone();
                if let Some(fetch) = fetch {
                    app.spawn_stats(code, vec![fetch]);
                }
            }
        }
        KeyCode::Char('r') => {
            if let Some(stats) = app.stats.as_mut() {
                let fetches = stats.open();
                let code = stats.code.clone();
                app.spawn_stats(code, fetches);
                app.set_status("Refreshing…".to_string());
            }
        }
        KeyCode::Char('y') => app.copy_short_url(),
        KeyCode::Char('?') | KeyCode::Char('h') => app.switch_screen(CurrentScreen::Help),
        KeyCode::Char('q') => app.switch_screen(CurrentScreen::Exiting),
        _ => {}
    }
    false
}

/// A quick period resets the table to page 1 and rebuilds both panels
fn set_quick_period(app: &mut App, period: Period) {
    let Some(stats) = app.stats.as_mut() else {
        return;
    };
    let fetches = stats.set_period(period);
    let code = stats.code.clone();
    app.spawn_stats(code, fetches);
    app.set_status(format!("Period: {}", period.label()));
}

fn handle_custom_period(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.custom_editing = false,
        KeyCode::Tab => app.custom_field = app.custom_field.toggle(),
        KeyCode::Enter => apply_custom_period(app),
        KeyCode::Backspace => {
            app.custom_input_mut().pop();
        }
        KeyCode::Char(c) => app.custom_input_mut().push(c),
        _ => {}
    }
}

/// Validate and apply the custom range. At least one bound is required;
/// a validation failure surfaces immediately and no request goes out.
fn apply_custom_period(app: &mut App) {
    let from = match parse_optional(&app.custom_from_input, false) {
        Ok(from) => from,
        Err(e) => return app.set_error(e),
    };
    let to = match parse_optional(&app.custom_to_input, true) {
        Ok(to) => to,
        Err(e) => return app.set_error(e),
    };

    let Some(stats) = app.stats.as_mut() else {
        return;
    };
    match stats.set_custom_range(from, to) {
        Ok(fetches) => {
            let code = stats.code.clone();
            app.spawn_stats(code, fetches);
            app.custom_editing = false;
            app.set_status("Custom period applied".to_string());
        }
        Err(e) => app.set_error(e.format_simple()),
    }
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
