//! One-shot HTML export (`ghtrack --html <path>`).
//!
//! Runs the same fetch, commit and render path as the terminal dashboard and
//! writes the result as a static page.

mod html;

pub use html::render_document;

use std::path::Path;

use tracing::info;

use crate::error::ExportError;
use crate::github::GitHubClient;
use crate::render::FilterCriteria;
use crate::state::ViewState;

/// Fetch `username` and write the dashboard page to `path`.
///
/// Fetch failures are returned rather than written, so a failed export never
/// leaves a half-empty page behind.
pub async fn export_html(
    client: &GitHubClient,
    username: &str,
    path: &Path,
) -> Result<(), ExportError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ExportError::BlankUsername);
    }

    let snapshot = client.fetch_snapshot(username).await?;
    let mut state = ViewState::new();
    state.replace(snapshot);

    let page = render_document(&state, &FilterCriteria::default());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| ExportError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(path, page)
        .await
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(username, path = %path.display(), "HTML snapshot written");
    Ok(())
}
