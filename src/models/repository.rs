//! Repository model for the GitHub `/users/{login}/repos` listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One repository owned by the tracked account.
///
/// Every field tolerates being absent or `null`; counts stay optional so the
/// render pipeline can apply its "missing counts as zero" rule explicitly.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Repository {
    /// Short repository name (e.g., "hello-world")
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Repository description (may be null)
    pub description: Option<String>,

    /// Browser URL of the repository
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,

    /// Primary language of the repository
    pub language: Option<String>,

    /// Number of stargazers
    pub stargazers_count: Option<u64>,

    /// Number of forks
    pub forks_count: Option<u64>,

    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,

    /// Whether this is a fork
    #[serde(deserialize_with = "null_as_default")]
    pub fork: bool,

    /// Topic tags
    #[serde(deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
}

impl Repository {
    /// Star count with missing treated as zero.
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    /// Fork count with missing treated as zero.
    pub fn forks(&self) -> u64 {
        self.forks_count.unwrap_or(0)
    }

    /// Primary language, skipping empty strings.
    pub fn primary_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }

    /// Description, skipping empty strings.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|desc| !desc.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_deserialization() {
        let json = r#"{
            "name": "Hello-World",
            "description": "My first repository",
            "html_url": "https://github.com/octocat/Hello-World",
            "language": "Rust",
            "stargazers_count": 80,
            "forks_count": 9,
            "updated_at": "2011-01-26T19:14:43Z",
            "fork": false,
            "topics": ["octocat", "api"]
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description(), Some("My first repository"));
        assert_eq!(repo.primary_language(), Some("Rust"));
        assert_eq!(repo.stars(), 80);
        assert_eq!(repo.forks(), 9);
        assert!(!repo.fork);
        assert_eq!(repo.topics, vec!["octocat", "api"]);
        assert_eq!(
            repo.updated_at.unwrap().to_rfc3339(),
            "2011-01-26T19:14:43+00:00"
        );
    }

    #[test]
    fn test_repository_deserialization_null_fields() {
        let json = r#"{
            "name": "spoon-knife",
            "description": null,
            "html_url": "https://github.com/octocat/spoon-knife",
            "language": null,
            "stargazers_count": null,
            "fork": true,
            "topics": null
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert!(repo.description().is_none());
        assert!(repo.primary_language().is_none());
        assert_eq!(repo.stars(), 0);
        assert_eq!(repo.forks(), 0);
        assert!(repo.updated_at.is_none());
        assert!(repo.fork);
        assert!(repo.topics.is_empty());
    }

    #[test]
    fn test_empty_language_is_absent() {
        let repo = Repository {
            language: Some(String::new()),
            ..Default::default()
        };
        assert!(repo.primary_language().is_none());
    }
}
