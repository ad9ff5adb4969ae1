//! Shared fixtures for integration tests.
//!
//! The fixture account is `octocat` with eight repositories: two starred
//! (1 and 2 stars), two forks, three languages and one repository without a
//! language.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};

use ghtrack::adapters::mock::{MockHttpClient, MockResponse};
use ghtrack::app::App;
use ghtrack::config::TrackerConfig;
use ghtrack::models::{Profile, Repository, UserSnapshot};
use ghtrack::traits::Response;

/// API root used with the mock HTTP client.
pub const MOCK_API: &str = "http://api.test";

pub fn profile_json() -> Value {
    json!({
        "login": "octocat",
        "name": "The Octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231",
        "html_url": "https://github.com/octocat",
        "bio": null,
        "location": "San Francisco",
        "company": "@github",
        "blog": "github.blog",
        "followers": 3,
        "following": 9,
        "public_repos": 8,
        "created_at": "2011-01-25T18:44:36Z"
    })
}

fn repo_json(name: &str, language: Option<&str>, stars: u64, fork: bool, updated: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{} description", name),
        "html_url": format!("https://github.com/octocat/{}", name),
        "language": language,
        "stargazers_count": stars,
        "forks_count": 1,
        "updated_at": updated,
        "fork": fork,
        "topics": []
    })
}

/// Eight repositories in API order (most recently updated first).
pub fn repos_json() -> Value {
    Value::Array(vec![
        repo_json("Hello-World", Some("Ruby"), 1, false, "2024-06-08T10:00:00Z"),
        repo_json("Spoon-Knife", Some("HTML"), 2, false, "2024-06-07T10:00:00Z"),
        repo_json("octocat.github.io", Some("CSS"), 0, false, "2024-06-06T10:00:00Z"),
        repo_json("git-consortium", None, 0, false, "2024-06-05T10:00:00Z"),
        repo_json("hello-worId", Some("Ruby"), 0, true, "2024-06-04T10:00:00Z"),
        repo_json("linguist", Some("Ruby"), 0, true, "2024-06-03T10:00:00Z"),
        repo_json("test-repo1", Some("HTML"), 0, false, "2024-06-02T10:00:00Z"),
        repo_json("boysenberry-repo-1", Some("HTML"), 0, false, "2024-06-01T10:00:00Z"),
    ])
}

pub fn snapshot() -> UserSnapshot {
    let profile: Profile = serde_json::from_value(profile_json()).unwrap();
    let repos: Vec<Repository> = serde_json::from_value(repos_json()).unwrap();
    UserSnapshot::new(profile, repos)
}

pub fn profile_url(username: &str) -> String {
    format!("{}/users/{}", MOCK_API, username)
}

pub fn repos_url(username: &str) -> String {
    format!(
        "{}/users/{}/repos?per_page=100&type=owner&sort=updated",
        MOCK_API, username
    )
}

/// Mock client that serves the fixture account as `username`.
pub fn mock_with_user(username: &str) -> MockHttpClient {
    let mock = MockHttpClient::new();
    serve_user(&mock, username);
    mock
}

pub fn serve_user(mock: &MockHttpClient, username: &str) {
    mock.set_response(
        &profile_url(username),
        MockResponse::Success(Response::json_body(&profile_json())),
    );
    mock.set_response(
        &repos_url(username),
        MockResponse::Success(Response::json_body(&repos_json())),
    );
}

pub fn serve_status(mock: &MockHttpClient, url: &str, status: u16) {
    mock.set_response(
        url,
        MockResponse::Success(Response::new(status, r#"{"message":"nope"}"#)),
    );
}

pub fn test_config() -> TrackerConfig {
    TrackerConfig::default().with_api_url(MOCK_API)
}

pub fn app_with(mock: MockHttpClient) -> App {
    App::new(test_config(), Arc::new(mock))
}

/// Start a load and apply the fetch result once it arrives.
pub async fn load_and_apply(app: &mut App, username: &str) {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    assert!(app.load_user(username));
    let msg = rx.recv().await.expect("fetch task dropped its sender");
    app.handle_message(msg);
    app.message_rx = Some(rx);
}
