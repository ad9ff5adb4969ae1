//! Fetch coordinator for the GitHub REST API.
//!
//! Issues the profile and repository requests concurrently, joins them, and
//! classifies failures into a single [`FetchError`] before any body is parsed.

use std::sync::Arc;

use serde_json::Value;

use crate::config::TrackerConfig;
use crate::error::{FetchError, FetchResource, FetchResult};
use crate::models::{Profile, Repository, UserSnapshot};
use crate::traits::{Headers, HttpClient, Response};

/// Largest page the repository listing endpoint serves.
pub const REPOS_PER_PAGE: u32 = 100;

/// Client for the two endpoints the dashboard needs.
#[derive(Clone)]
pub struct GitHubClient {
    http: Arc<dyn HttpClient>,
    api_url: String,
    headers: Headers,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client that talks to `config.api_url` through `http`.
    pub fn new(http: Arc<dyn HttpClient>, config: &TrackerConfig) -> Self {
        let mut headers = Headers::new();
        headers.insert("User-Agent".to_string(), config.user_agent.clone());
        headers.insert(
            "Accept".to_string(),
            "application/vnd.github+json".to_string(),
        );

        Self {
            http,
            api_url: config.api_url.clone(),
            headers,
        }
    }

    /// API root this client targets.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// URL of the profile endpoint for `username`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.api_url, urlencoding::encode(username))
    }

    /// URL of the owner repository listing, newest updates first.
    pub fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page={}&type=owner&sort=updated",
            self.api_url,
            urlencoding::encode(username),
            REPOS_PER_PAGE
        )
    }

    /// Fetch the profile and repository list for `username`.
    ///
    /// Both requests are in flight at the same time and both must settle before
    /// anything is inspected. Status checks run before any body is parsed:
    /// profile 404, then any other profile failure, then repository failure.
    ///
    /// Callers are expected to have rejected blank usernames already.
    pub async fn fetch_snapshot(&self, username: &str) -> FetchResult<UserSnapshot> {
        let profile_url = self.profile_url(username);
        let repos_url = self.repos_url(username);

        tracing::debug!(%profile_url, %repos_url, "Fetching profile and repositories");

        let (profile_res, repos_res) = tokio::join!(
            self.http.get(&profile_url, &self.headers),
            self.http.get(&repos_url, &self.headers),
        );
        let profile_res = profile_res?;
        let repos_res = repos_res?;

        check_status(FetchResource::User, &profile_res)?;
        check_status(FetchResource::Repos, &repos_res)?;

        let profile: Profile = profile_res.json()?;
        let repos = parse_repositories(&repos_res)?;

        tracing::debug!(
            login = %profile.login,
            repo_count = repos.len(),
            "Fetched snapshot"
        );

        Ok(UserSnapshot::new(profile, repos))
    }
}

fn check_status(resource: FetchResource, response: &Response) -> FetchResult<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(FetchError::from_status(resource, response.status))
    }
}

/// Decode the repository listing.
///
/// The API can answer 2xx with an object (e.g. a message payload) instead of an
/// array; anything that is not an array yields an empty list.
pub fn parse_repositories(response: &Response) -> FetchResult<Vec<Repository>> {
    let value: Value = response.json()?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => {
            tracing::debug!(
                kind = json_kind(&other),
                "Repository payload is not an array; treating as empty"
            );
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
