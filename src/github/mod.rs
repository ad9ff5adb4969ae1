//! GitHub REST API access.

mod client;

pub use client::{parse_repositories, GitHubClient, REPOS_PER_PAGE};
