//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::UserSnapshot;

/// Results delivered from spawned fetch tasks to the UI task.
///
/// Each carries the username it was requested for, so late arrivals can be
/// recognised when a newer load has started since.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Both requests succeeded
    UserLoaded {
        username: String,
        snapshot: UserSnapshot,
    },
    /// Either request failed, or a body could not be decoded
    LoadFailed { username: String, error: FetchError },
}

impl AppMessage {
    pub fn username(&self) -> &str {
        match self {
            AppMessage::UserLoaded { username, .. } | AppMessage::LoadFailed { username, .. } => {
                username
            }
        }
    }
}
