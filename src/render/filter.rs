//! Repository filtering and sorting.
//!
//! Derived lists borrow from the fetched sequence; nothing here mutates it.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu::collator::options::{CollatorOptions, Strength};
use icu::collator::{Collator, CollatorBorrowed};

use crate::models::Repository;

/// Sort order for the repository list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recently updated first
    #[default]
    Updated,
    /// Most starred first
    Stars,
    /// Most forked first
    Forks,
    /// Alphabetical by name
    Name,
}

impl SortKey {
    /// Selector order.
    pub const ALL: [SortKey; 4] = [SortKey::Updated, SortKey::Stars, SortKey::Forks, SortKey::Name];

    /// Stable identifier (also accepted by [`FromStr`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Updated => "updated",
            SortKey::Stars => "stars",
            SortKey::Forks => "forks",
            SortKey::Name => "name",
        }
    }

    /// Label shown in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Updated => "Last updated",
            SortKey::Stars => "Stars",
            SortKey::Forks => "Forks",
            SortKey::Name => "Name",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    /// Next key in selector order, wrapping.
    pub fn next(&self) -> SortKey {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous key in selector order, wrapping.
    pub fn prev(&self) -> SortKey {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Comparator for this key.
    pub fn compare(&self, a: &Repository, b: &Repository) -> Ordering {
        match self {
            SortKey::Updated => b.updated_at.cmp(&a.updated_at),
            SortKey::Stars => b.stars().cmp(&a.stars()),
            SortKey::Forks => b.forks().cmp(&a.forks()),
            SortKey::Name => compare_names(&a.name, &b.name),
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    /// Unknown or empty keys fall back to [`SortKey::Updated`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "stars" => SortKey::Stars,
            "forks" => SortKey::Forks,
            "name" => SortKey::Name,
            _ => SortKey::Updated,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

thread_local! {
    static NAME_COLLATOR: Option<CollatorBorrowed<'static>> = {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);
        match Collator::try_new(Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("Name collator unavailable, using plain ordering: {}", e);
                None
            }
        }
    };
}

/// Human ordering for names using root-locale collation.
///
/// Accents and case only break ties (`alpha < Ärger < zeta`, and `a` sorts
/// ahead of `A`), and punctuation sorts before digits and letters.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a)),
    })
}

/// Current state of the filter and sort controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively against name or description
    pub query: String,
    /// Keep only forks
    pub forks_only: bool,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, forks_only: bool, sort: SortKey) -> Self {
        Self {
            query: query.into(),
            forks_only,
            sort,
        }
    }

    /// Whether `repo` passes both filters.
    pub fn matches(&self, repo: &Repository) -> bool {
        self.matches_fork(repo) && matches_query(repo, &self.query.to_lowercase())
    }

    fn matches_fork(&self, repo: &Repository) -> bool {
        !self.forks_only || repo.fork
    }
}

fn matches_query(repo: &Repository, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    repo.name.to_lowercase().contains(needle_lower)
        || repo
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle_lower)
}

/// Keep only forks (when requested).
pub fn filter_forks<'a>(repos: Vec<&'a Repository>, forks_only: bool) -> Vec<&'a Repository> {
    if !forks_only {
        return repos;
    }
    repos.into_iter().filter(|r| r.fork).collect()
}

/// Keep only entries whose name or description contains `query`.
pub fn filter_query<'a>(repos: Vec<&'a Repository>, query: &str) -> Vec<&'a Repository> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return repos;
    }
    repos
        .into_iter()
        .filter(|r| matches_query(r, &needle))
        .collect()
}

/// Apply the fork filter, the search filter and the sort, in that order.
///
/// The sort is stable, so equal keys keep their API order.
pub fn filter_and_sort<'a>(repos: &'a [Repository], criteria: &FilterCriteria) -> Vec<&'a Repository> {
    let list: Vec<&Repository> = repos.iter().collect();
    let list = filter_forks(list, criteria.forks_only);
    let mut list = filter_query(list, &criteria.query);
    list.sort_by(|a, b| criteria.sort.compare(a, b));
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn names(list: &[&Repository]) -> Vec<String> {
        list.iter().map(|r| r.name.clone()).collect()
    }

    fn sample() -> Vec<Repository> {
        vec![
            Repository {
                name: "linguist".to_string(),
                description: Some("Language Savant".to_string()),
                fork: true,
                stargazers_count: Some(10),
                forks_count: Some(1),
                updated_at: Some(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap()),
                ..Default::default()
            },
            Repository {
                name: "Spoon-Knife".to_string(),
                description: None,
                fork: false,
                stargazers_count: Some(12000),
                forks_count: Some(150000),
                updated_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
                ..Default::default()
            },
            Repository {
                name: "hello-world".to_string(),
                description: Some("My first SAVANT repo".to_string()),
                fork: true,
                stargazers_count: None,
                forks_count: None,
                updated_at: Some(Utc.with_ymd_and_hms(2022, 3, 3, 0, 0, 0).unwrap()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_sort_key_from_str_defaults() {
        assert_eq!("stars".parse::<SortKey>().unwrap(), SortKey::Stars);
        assert_eq!("Forks".parse::<SortKey>().unwrap(), SortKey::Forks);
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("updated".parse::<SortKey>().unwrap(), SortKey::Updated);
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::Updated);
        assert_eq!("bogus".parse::<SortKey>().unwrap(), SortKey::Updated);
    }

    #[test]
    fn test_sort_key_cycles() {
        assert_eq!(SortKey::Updated.next(), SortKey::Stars);
        assert_eq!(SortKey::Name.next(), SortKey::Updated);
        assert_eq!(SortKey::Updated.prev(), SortKey::Name);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let repos = vec![repo("b"), repo("A"), repo("c")];
        let criteria = FilterCriteria::new("", false, SortKey::Name);
        assert_eq!(names(&filter_and_sort(&repos, &criteria)), vec!["A", "b", "c"]);
    }

    #[test]
    fn test_name_sort_ignores_accents_on_first_pass() {
        let repos = vec![repo("zeta"), repo("Ärger"), repo("alpha")];
        let criteria = FilterCriteria::new("", false, SortKey::Name);
        assert_eq!(
            names(&filter_and_sort(&repos, &criteria)),
            vec!["alpha", "Ärger", "zeta"]
        );
    }

    #[test]
    fn test_name_sort_puts_punctuation_before_digits() {
        let repos = vec![repo("a1"), repo("a_b"), repo("a-b")];
        let criteria = FilterCriteria::new("", false, SortKey::Name);
        assert_eq!(
            names(&filter_and_sort(&repos, &criteria)),
            vec!["a_b", "a-b", "a1"]
        );
    }

    #[test]
    fn test_compare_names_lowercase_first_on_tie() {
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("A", "a"), Ordering::Greater);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_default_sort_is_updated_desc() {
        let repos = sample();
        let list = filter_and_sort(&repos, &FilterCriteria::default());
        assert_eq!(names(&list), vec!["Spoon-Knife", "linguist", "hello-world"]);
    }

    #[test]
    fn test_missing_timestamp_sorts_last() {
        let mut repos = sample();
        repos[1].updated_at = None;
        let list = filter_and_sort(&repos, &FilterCriteria::default());
        assert_eq!(list.last().map(|r| r.name.as_str()), Some("Spoon-Knife"));
    }

    #[test]
    fn test_stars_and_forks_desc_with_missing_as_zero() {
        let repos = sample();
        let by_stars = filter_and_sort(&repos, &FilterCriteria::new("", false, SortKey::Stars));
        assert_eq!(names(&by_stars), vec!["Spoon-Knife", "linguist", "hello-world"]);

        let by_forks = filter_and_sort(&repos, &FilterCriteria::new("", false, SortKey::Forks));
        assert_eq!(names(&by_forks), vec!["Spoon-Knife", "linguist", "hello-world"]);
    }

    #[test]
    fn test_query_matches_name_or_description() {
        let repos = sample();
        let list = filter_and_sort(&repos, &FilterCriteria::new("savant", false, SortKey::Name));
        assert_eq!(names(&list), vec!["hello-world", "linguist"]);

        let list = filter_and_sort(&repos, &FilterCriteria::new("KNIFE", false, SortKey::Name));
        assert_eq!(names(&list), vec!["Spoon-Knife"]);
    }

    #[test]
    fn test_forks_only() {
        let repos = sample();
        let list = filter_and_sort(&repos, &FilterCriteria::new("", true, SortKey::Name));
        assert!(list.iter().all(|r| r.fork));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_filters_commute() {
        let repos = sample();
        for query in ["", "savant", "o", "zzz", "HELLO"] {
            for forks_only in [false, true] {
                let all: Vec<&Repository> = repos.iter().collect();
                let forks_then_query =
                    filter_query(filter_forks(all.clone(), forks_only), query);
                let query_then_forks =
                    filter_forks(filter_query(all, query), forks_only);
                assert_eq!(names(&forks_then_query), names(&query_then_forks));
            }
        }
    }

    #[test]
    fn test_criteria_matches_agrees_with_pipeline() {
        let repos = sample();
        let criteria = FilterCriteria::new("savant", true, SortKey::Updated);
        let expected: Vec<&Repository> = repos.iter().filter(|r| criteria.matches(r)).collect();
        assert_eq!(
            filter_and_sort(&repos, &criteria).len(),
            expected.len()
        );
    }

    #[test]
    fn test_source_is_not_mutated() {
        let repos = sample();
        let before = repos.clone();
        let _ = filter_and_sort(&repos, &FilterCriteria::new("", true, SortKey::Name));
        assert_eq!(repos, before);
    }
}
