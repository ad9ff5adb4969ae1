//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which control has focus
//! - [`AppMessage`] - Fetch results sent back from spawned tasks

mod actions;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::Focus;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::TrackerConfig;
use crate::github::GitHubClient;
use crate::render::{FilterCriteria, RepoListView, SortKey};
use crate::state::ViewState;
use crate::traits::HttpClient;
use crate::widgets::TextField;

/// Opens a URL outside the terminal (browser, mail client, ...).
pub type LinkOpener = Arc<dyn Fn(&str) -> std::io::Result<()> + Send + Sync>;

fn system_opener() -> LinkOpener {
    Arc::new(|url: &str| open::that_detached(url))
}

/// Main application state
pub struct App {
    pub config: TrackerConfig,
    /// Fetch coordinator (cloned into each load task)
    pub client: GitHubClient,
    /// Last committed snapshot, chart slots and load status
    pub view: ViewState,
    /// Username input
    pub username: TextField,
    /// Repository search input
    pub search: TextField,
    pub sort: SortKey,
    pub forks_only: bool,
    pub focus: Focus,
    /// Selected card in the filtered repository list
    pub selected: usize,
    /// First visible card
    pub scroll_offset: usize,
    /// Number of cards that fit in the repository region (set during render)
    pub visible_cards: usize,
    /// Username of the most recently started load
    pub pending_user: Option<String>,
    /// One-line feedback in the footer (e.g. a link that failed to open)
    pub notice: Option<String>,
    pub should_quit: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    pub spinner_frame: usize,
    /// Flag to track if the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Receiver for fetch results (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for fetch results (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    opener: LinkOpener,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("focus", &self.focus)
            .field("sort", &self.sort)
            .field("forks_only", &self.forks_only)
            .field("selected", &self.selected)
            .field("status", self.view.status())
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create the app; the username input starts with the configured default.
    pub fn new(config: TrackerConfig, http: Arc<dyn HttpClient>) -> Self {
        let client = GitHubClient::new(http, &config);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            username: TextField::with_content(config.default_user.clone()),
            config,
            client,
            view: ViewState::new(),
            search: TextField::new(),
            sort: SortKey::default(),
            forks_only: false,
            focus: Focus::default(),
            selected: 0,
            scroll_offset: 0,
            visible_cards: 0,
            pending_user: None,
            notice: None,
            should_quit: false,
            tick_count: 0,
            spinner_frame: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            opener: system_opener(),
        }
    }

    /// Replace the link opener (tests record instead of launching a browser).
    pub fn with_opener(mut self, opener: LinkOpener) -> Self {
        self.opener = opener;
        self
    }

    /// Current state of the list controls.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.search.content(), self.forks_only, self.sort)
    }

    /// Repository region for the current controls.
    pub fn repo_list(&self) -> Option<RepoListView> {
        self.view.repo_list(&self.criteria())
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations; only the spinner moves, and only while loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() && self.tick_count % 6 == 0 {
            self.spinner_frame = crate::ui::components::next_spinner_frame(self.spinner_frame);
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
