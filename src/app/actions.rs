//! User-triggered actions: loading a user and opening links.

use tracing::{debug, warn};

use super::{App, AppMessage};
use crate::render::RepoCard;

impl App {
    /// Start loading `username`.
    ///
    /// Blank input is a no-op and returns `false`. Otherwise the view switches
    /// to the loading skeleton and a task fetches both resources; its result
    /// comes back through [`AppMessage`]. An in-flight load is not cancelled.
    pub fn load_user(&mut self, username: &str) -> bool {
        let username = username.trim();
        if username.is_empty() {
            return false;
        }

        if let Some(previous) = self.pending_user.as_deref() {
            if self.is_loading() {
                debug!(previous, next = username, "Load started while another is in flight");
            }
        }

        self.view.begin_loading(username);
        self.pending_user = Some(username.to_string());
        self.selected = 0;
        self.scroll_offset = 0;
        self.notice = None;
        self.mark_dirty();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let username = username.to_string();
        tokio::spawn(async move {
            let message = match client.fetch_snapshot(&username).await {
                Ok(snapshot) => AppMessage::UserLoaded { username, snapshot },
                Err(error) => AppMessage::LoadFailed { username, error },
            };
            // receiver gone means the app is shutting down
            let _ = tx.send(message);
        });
        true
    }

    /// Submit the username input; blank input loads the default user.
    pub fn submit(&mut self) -> bool {
        let typed = self.username.content().trim().to_string();
        let target = if typed.is_empty() {
            self.config.default_user.clone()
        } else {
            typed
        };
        self.load_user(&target)
    }

    /// Card under the selection in the filtered list.
    pub fn selected_card(&self) -> Option<RepoCard> {
        self.repo_list()
            .and_then(|list| list.cards().get(self.selected).cloned())
    }

    /// Open the selected repository in the browser.
    pub fn open_selected(&mut self) -> bool {
        match self.selected_card() {
            Some(card) if !card.url.is_empty() => self.open_link(&card.url),
            _ => false,
        }
    }

    /// Open the profile's blog link.
    pub fn open_profile_link(&mut self) -> bool {
        let link = self
            .view
            .profile_view()
            .and_then(|p| p.link().map(str::to_string));
        match link {
            Some(url) => self.open_link(&url),
            None => false,
        }
    }

    fn open_link(&mut self, url: &str) -> bool {
        self.mark_dirty();
        match (self.opener)(url) {
            Ok(()) => {
                debug!(url, "Opened link");
                self.notice = Some(format!("Opened {}", url));
                true
            }
            Err(err) => {
                warn!(url, error = %err, "Failed to open link");
                self.notice = Some(format!("Could not open {}: {}", url, err));
                false
            }
        }
    }
}
