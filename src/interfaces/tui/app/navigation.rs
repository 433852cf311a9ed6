//! Screen transitions, table selection and clipboard helpers

use super::{App, CurrentScreen};
use crate::client::LinkSummary;
use crate::views::StatsView;

impl App {
    pub fn selected_link(&self) -> Option<&LinkSummary> {
        self.links.rows.get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.links.rows.len() {
            self.selected_index += 1;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.links.rows.len().saturating_sub(1);
    }

    /// Open the statistics screen for the selected link.
    /// The stats view lives exactly as long as the screen is open.
    pub fn open_stats(&mut self) {
        let Some(link) = self.selected_link() else {
            return;
        };
        let config = crate::config::get_config();
        let mut stats = StatsView::new(link.code.clone(), config.ui.page_size);
        let fetches = stats.open();
        let code = stats.code.clone();
        self.stats = Some(stats);
        self.spawn_stats(code, fetches);
        self.switch_screen(CurrentScreen::Stats);
    }

    /// Open the batch-creation screen with a fresh form
    pub fn open_create(&mut self) {
        let config = crate::config::get_config();
        let mut create = crate::views::CreateView::new(config.ui.recent_page_size);
        create.set_domains(self.links.domains.clone());
        let fetch = create.start_recent_fetch();
        self.create = create;
        self.spawn_recent(fetch);
        self.switch_screen(CurrentScreen::Create);
    }

    /// Leave the statistics screen, discarding its view state
    pub fn close_stats(&mut self) {
        self.stats = None;
        self.custom_editing = false;
        self.custom_from_input.clear();
        self.custom_to_input.clear();
        self.switch_screen(CurrentScreen::Links);
    }

    pub fn switch_screen(&mut self, screen: CurrentScreen) {
        self.previous_screen = self.current_screen;
        self.current_screen = screen;
        self.clear_messages();
    }

    /// Return from a transient screen (help, exit confirm)
    pub fn go_back(&mut self) {
        self.current_screen = self.previous_screen;
    }

    /// Copy the selected short URL to the system clipboard
    pub fn copy_short_url(&mut self) {
        let url = match self.current_screen {
            CurrentScreen::Stats => self
                .stats
                .as_ref()
                .and_then(|s| s.meta.as_ref())
                .map(|m| m.short_url()),
            _ => self.selected_link().map(|l| l.short_url()),
        };
        let Some(url) = url else {
            return;
        };
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(&url).is_ok() {
                    self.set_status(format!("Copied: {}", url));
                } else {
                    self.set_error("Clipboard unavailable".to_string());
                }
            }
            Err(_) => self.set_error("Clipboard unavailable".to_string()),
        }
    }
}
