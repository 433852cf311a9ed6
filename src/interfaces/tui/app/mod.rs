//! App state definition and basic state management

mod fetch;
mod navigation;

pub use fetch::ApiEvent;

use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::views::{CreateView, LinksView, StatsView};

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Links,
    Stats,
    Create,
    Help,
    Exiting,
}

/// Field under the cursor in the links filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    From,
    To,
}

impl FilterField {
    pub fn toggle(&self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::From,
        }
    }
}

pub struct App {
    pub client: ApiClient,
    pub current_screen: CurrentScreen,
    pub previous_screen: CurrentScreen,

    /// One view-state object per screen; the stats view exists only
    /// while a link is open
    pub links: LinksView,
    pub stats: Option<StatsView>,
    pub create: CreateView,

    /// Cursor row in the links table
    pub selected_index: usize,

    // Links filter bar editing
    pub filter_editing: bool,
    pub filter_field: FilterField,
    pub filter_from_input: String,
    pub filter_to_input: String,

    // Stats custom period editing
    pub custom_editing: bool,
    pub custom_field: FilterField,
    pub custom_from_input: String,
    pub custom_to_input: String,

    pub status_message: String,
    pub error_message: String,

    tx: mpsc::UnboundedSender<ApiEvent>,
    rx: mpsc::UnboundedReceiver<ApiEvent>,
}

impl App {
    pub fn new() -> App {
        let config = crate::config::get_config();
        let (tx, rx) = mpsc::unbounded_channel();

        App {
            client: ApiClient::from_config(),
            current_screen: CurrentScreen::Links,
            previous_screen: CurrentScreen::Links,
            links: LinksView::new(config.ui.page_size),
            stats: None,
            create: CreateView::new(config.ui.recent_page_size),
            selected_index: 0,
            filter_editing: false,
            filter_field: FilterField::default(),
            filter_from_input: String::new(),
            filter_to_input: String::new(),
            custom_editing: false,
            custom_field: FilterField::default(),
            custom_from_input: String::new(),
            custom_to_input: String::new(),
            status_message: String::new(),
            error_message: String::new(),
            tx,
            rx,
        }
    }

    /// Initial fetches: domain list plus the first links page
    pub fn bootstrap(&mut self) {
        self.spawn_domains();
        let fetch = self.links.start_fetch();
        self.spawn_links(fetch);
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    pub fn filter_input_mut(&mut self) -> &mut String {
        match self.filter_field {
            FilterField::From => &mut self.filter_from_input,
            FilterField::To => &mut self.filter_to_input,
        }
    }

    pub fn custom_input_mut(&mut self) -> &mut String {
        match self.custom_field {
            FilterField::From => &mut self.custom_from_input,
            FilterField::To => &mut self.custom_to_input,
        }
    }
}
