//! User profile model for the GitHub `/users/{login}` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Public profile of a GitHub account.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    /// Account handle
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    /// Display name
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    /// Blog/website, stored as the user typed it (scheme optional)
    pub blog: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub public_repos: Option<u64>,
    /// Account creation timestamp
    pub created_at: Option<DateTime<Utc>>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Profile {
    /// Display name, falling back to the login handle.
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(&self.login)
    }

    pub fn bio(&self) -> Option<&str> {
        non_empty(&self.bio)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company)
    }

    /// GitHub returns `""` for accounts without a blog.
    pub fn blog(&self) -> Option<&str> {
        non_empty(&self.blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserialization() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "name": "The Octocat",
            "company": "@github",
            "blog": "https://github.blog",
            "location": "San Francisco",
            "bio": null,
            "public_repos": 8,
            "followers": 9999,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z"
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.display_name(), "The Octocat");
        assert_eq!(profile.company(), Some("@github"));
        assert_eq!(profile.blog(), Some("https://github.blog"));
        assert!(profile.bio().is_none());
        assert_eq!(profile.public_repos, Some(8));
        assert_eq!(profile.followers, Some(9999));
        assert!(profile.created_at.is_some());
    }

    #[test]
    fn test_display_name_falls_back_to_login() {
        let profile = Profile {
            login: "ghost".to_string(),
            name: None,
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "ghost");

        let blank = Profile {
            login: "ghost".to_string(),
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.display_name(), "ghost");
    }

    #[test]
    fn test_empty_blog_is_absent() {
        let profile: Profile = serde_json::from_str(r#"{"login":"a","blog":""}"#).unwrap();
        assert!(profile.blog().is_none());
    }
}
