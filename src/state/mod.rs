//! View state
//!
//! Holds the last successfully fetched snapshot together with the two chart
//! slots. Transitions are explicit:
//! - [`ViewState::begin_loading`] when a fetch starts
//! - [`ViewState::replace`] when both requests succeed
//! - [`ViewState::reset`] on any failure
//!
//! Profile and repositories live in one [`UserSnapshot`], so they are either
//! both present or both absent.

use tracing::{debug, info};

use crate::charts::{ChartSet, LanguageHistogram, StarSeries};
use crate::models::{Profile, Repository, UserSnapshot};
use crate::render::{FilterCriteria, ProfileView, RepoListView, StatCounters};

/// Lifecycle of the most recent load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Requests in flight; the profile region shows a skeleton
    Loading { username: String },
    /// Snapshot committed
    Ready,
    /// Last load failed with this message
    Failed(String),
}

/// Owned state behind every rendered region.
#[derive(Debug, Default)]
pub struct ViewState {
    snapshot: Option<UserSnapshot>,
    charts: ChartSet,
    stats: StatCounters,
    status: LoadStatus,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the loading skeleton and blank the repository area.
    ///
    /// The previous snapshot and charts stay until the load settles.
    pub fn begin_loading(&mut self, username: &str) {
        info!(username, "Loading user");
        self.status = LoadStatus::Loading {
            username: username.to_string(),
        };
    }

    /// Commit a fetched snapshot, then reproject both charts.
    pub fn replace(&mut self, snapshot: UserSnapshot) {
        info!(
            login = %snapshot.profile.login,
            repos = snapshot.repos.len(),
            "Snapshot committed"
        );
        self.stats = StatCounters::from_snapshot(&snapshot);
        self.charts.project_all(&snapshot.repos);
        self.snapshot = Some(snapshot);
        self.status = LoadStatus::Ready;
    }

    /// Drop the snapshot, dispose both charts and blank the counters.
    pub fn reset(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "View state reset");
        self.snapshot = None;
        self.charts.clear();
        self.stats = StatCounters::placeholder();
        self.status = LoadStatus::Failed(message);
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading { .. })
    }

    /// Inline error message of the last failed load.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<&UserSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.snapshot.as_ref().map(|s| &s.profile)
    }

    /// The fetched repositories in API order (empty when absent).
    pub fn repos(&self) -> &[Repository] {
        self.snapshot
            .as_ref()
            .map(|s| s.repos.as_slice())
            .unwrap_or_default()
    }

    pub fn stats(&self) -> &StatCounters {
        &self.stats
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    pub fn languages(&self) -> Option<&LanguageHistogram> {
        self.charts.languages()
    }

    pub fn top_stars(&self) -> Option<&StarSeries> {
        self.charts.top_stars()
    }

    /// Profile panel for the committed snapshot.
    ///
    /// `None` while loading or after a failure.
    pub fn profile_view(&self) -> Option<ProfileView> {
        match self.status {
            LoadStatus::Ready => self.profile().map(ProfileView::build),
            _ => None,
        }
    }

    /// Repository region for the current controls.
    ///
    /// `None` means the region is cleared (loading, failed or idle).
    pub fn repo_list(&self, criteria: &FilterCriteria) -> Option<RepoListView> {
        match (&self.status, &self.snapshot) {
            (LoadStatus::Ready, Some(snapshot)) => {
                Some(RepoListView::build(&snapshot.repos, criteria))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::STAT_PLACEHOLDER;

    fn snapshot() -> UserSnapshot {
        let profile = Profile {
            login: "octocat".to_string(),
            followers: Some(2000),
            following: Some(5),
            public_repos: Some(2),
            ..Default::default()
        };
        let repos = vec![
            Repository {
                name: "one".to_string(),
                language: Some("Rust".to_string()),
                stargazers_count: Some(4),
                ..Default::default()
            },
            Repository {
                name: "two".to_string(),
                stargazers_count: None,
                ..Default::default()
            },
        ];
        UserSnapshot::new(profile, repos)
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = ViewState::new();
        assert_eq!(state.status(), &LoadStatus::Idle);
        assert!(state.snapshot().is_none());
        assert!(state.repos().is_empty());
        assert_eq!(state.stats().stars, STAT_PLACEHOLDER);
        assert_eq!(state.charts().live_count(), 0);
    }

    #[test]
    fn test_replace_commits_and_projects() {
        let mut state = ViewState::new();
        state.begin_loading("octocat");
        assert!(state.is_loading());
        assert!(state.repo_list(&FilterCriteria::default()).is_none());

        state.replace(snapshot());
        assert_eq!(state.status(), &LoadStatus::Ready);
        assert_eq!(state.repos().len(), 2);
        assert_eq!(state.stats().followers, "2k");
        assert_eq!(state.stats().stars, "4");
        assert_eq!(state.charts().live_count(), 2);
        assert_eq!(state.languages().map(|h| h.labels.clone()), Some(vec!["Rust".to_string()]));
        assert_eq!(state.profile_view().map(|p| p.login), Some("octocat".to_string()));
        assert_eq!(
            state.repo_list(&FilterCriteria::default()).map(|l| l.len()),
            Some(2)
        );
    }

    #[test]
    fn test_loading_keeps_previous_snapshot() {
        let mut state = ViewState::new();
        state.replace(snapshot());
        state.begin_loading("someone-else");

        assert!(state.snapshot().is_some());
        assert!(state.profile_view().is_none());
        assert!(state.repo_list(&FilterCriteria::default()).is_none());
        assert_eq!(state.charts().live_count(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = ViewState::new();
        state.replace(snapshot());
        state.reset("User not found");

        assert_eq!(state.error(), Some("User not found"));
        assert!(state.snapshot().is_none());
        assert!(state.profile().is_none());
        assert!(state.languages().is_none());
        assert!(state.top_stars().is_none());
        assert_eq!(state.charts().live_count(), 0);
        assert!(state
            .stats()
            .entries()
            .iter()
            .all(|(_, value)| *value == STAT_PLACEHOLDER));
    }

    #[test]
    fn test_repeated_replace_keeps_one_instance_per_slot() {
        let mut state = ViewState::new();
        for _ in 0..3 {
            state.replace(snapshot());
        }
        assert_eq!(state.charts().live_count(), 2);
    }
}
