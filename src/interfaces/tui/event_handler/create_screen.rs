//! Event handlers for the batch creation form

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

pub fn handle_create_screen(app: &mut App, key: KeyEvent) -> bool {
    // Row management uses Ctrl so plain letters stay typeable in fields
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.create.add_entry(),
            KeyCode::Char('d') => app.create.remove_entry(),
            KeyCode::Char('l') => app.create.cycle_entry_domain(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => app.switch_screen(CurrentScreen::Links),
        KeyCode::Tab => app.create.next_field(),
        KeyCode::Down => {
            if app.create.cursor + 1 < app.create.entries.len() {
                app.create.cursor += 1;
            }
        }
        KeyCode::Up => {
            app.create.cursor = app.create.cursor.saturating_sub(1);
        }
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => app.create.pop_char(),
        KeyCode::Char(c) => app.create.push_char(c),
        _ => {}
    }
    false
}

/// Validate the form and send the batch. Validation failures block the
/// request and show up inline; the form keeps its contents.
fn submit(app: &mut App) {
    if app.create.submitting {
        return;
    }
    match app.create.build_request() {
        Ok(request) => {
            app.create.submitting = true;
            app.create.error = None;
            app.spawn_shorten(request);
            app.set_status("Submitting…".to_string());
        }
        Err(e) => {
            let message = e.format_simple();
            app.create.error = Some(message.clone());
            app.set_error(message);
        }
    }
}
