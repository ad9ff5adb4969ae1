//! Message handling for the App.

use tracing::{info, warn};

use super::{App, AppMessage};

impl App {
    /// Apply a fetch result.
    ///
    /// Results are applied in arrival order. A result for a user other than
    /// the latest request is still applied (there is no cancellation), but it
    /// is logged so the race is visible.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();

        if self.pending_user.as_deref() != Some(msg.username()) {
            warn!(
                arrived = msg.username(),
                latest = self.pending_user.as_deref().unwrap_or(""),
                "Stale response applied"
            );
        }

        match msg {
            AppMessage::UserLoaded { username, snapshot } => {
                info!(username, repos = snapshot.repos.len(), "User loaded");
                self.view.replace(snapshot);
                self.clamp_selection();
            }
            AppMessage::LoadFailed { username, error } => {
                warn!(username, code = error.error_code(), error = %error, "User load failed");
                self.view.reset(error.to_string());
                self.selected = 0;
                self.scroll_offset = 0;
            }
        }
    }
}
