//! View models produced by the render pipeline.
//!
//! These hold raw API text. Each output backend applies its own safety rule:
//! the terminal UI strips control characters, the HTML export escapes.

use crate::models::{Profile, Repository, UserSnapshot};

use super::filter::{filter_and_sort, FilterCriteria};
use super::format::{format_long_date, format_num, format_short_date, format_url, STAT_PLACEHOLDER};

/// Topic tags shown per repository card.
pub const MAX_CARD_TOPICS: usize = 4;

/// Placeholder for an empty filtered list.
pub const NO_MATCHES_TEXT: &str = "No repositories match your filters.";

/// Optional fact shown under the profile name.
#[derive(Debug, Clone, PartialEq)]
pub enum Chip {
    Location(String),
    Company(String),
    /// Blog link: `text` as stored, `href` with a scheme
    Link { text: String, href: String },
    /// Account creation date, already formatted
    Joined(String),
}

impl Chip {
    /// Single-width glyph used in the terminal.
    pub fn icon(&self) -> &'static str {
        match self {
            Chip::Location(_) => "\u{2316}",
            Chip::Company(_) => "\u{25A3}",
            Chip::Link { .. } => "\u{21D7}",
            Chip::Joined(_) => "\u{25F7}",
        }
    }

    /// Visible text of the chip.
    pub fn text(&self) -> String {
        match self {
            Chip::Location(text) | Chip::Company(text) => text.clone(),
            Chip::Link { text, .. } => text.clone(),
            Chip::Joined(date) => format!("Joined {}", date),
        }
    }
}

/// Profile panel contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub avatar_url: String,
    pub display_name: String,
    pub login: String,
    pub bio: Option<String>,
    /// Location, company and link when present, then the joined date
    pub chips: Vec<Chip>,
}

impl ProfileView {
    pub fn build(profile: &Profile) -> Self {
        let mut chips = Vec::new();
        if let Some(location) = profile.location() {
            chips.push(Chip::Location(location.to_string()));
        }
        if let Some(company) = profile.company() {
            chips.push(Chip::Company(company.to_string()));
        }
        if let Some(blog) = profile.blog() {
            chips.push(Chip::Link {
                text: blog.to_string(),
                href: format_url(blog),
            });
        }
        let joined = profile
            .created_at
            .as_ref()
            .map(format_long_date)
            .unwrap_or_else(|| "Invalid Date".to_string());
        chips.push(Chip::Joined(joined));

        Self {
            avatar_url: profile.avatar_url.clone(),
            display_name: profile.display_name().to_string(),
            login: profile.login.clone(),
            bio: profile.bio().map(str::to_string),
            chips,
        }
    }

    /// Link target of the blog chip, if any.
    pub fn link(&self) -> Option<&str> {
        self.chips.iter().find_map(|chip| match chip {
            Chip::Link { href, .. } => Some(href.as_str()),
            _ => None,
        })
    }
}

/// The four stat counters, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCounters {
    pub followers: String,
    pub following: String,
    pub repos: String,
    pub stars: String,
}

impl StatCounters {
    pub fn from_snapshot(snapshot: &UserSnapshot) -> Self {
        let profile = &snapshot.profile;
        Self {
            followers: format_num(profile.followers),
            following: format_num(profile.following),
            repos: format_num(profile.public_repos),
            stars: format_num(Some(snapshot.total_stars())),
        }
    }

    /// All four counters blanked.
    pub fn placeholder() -> Self {
        Self {
            followers: STAT_PLACEHOLDER.to_string(),
            following: STAT_PLACEHOLDER.to_string(),
            repos: STAT_PLACEHOLDER.to_string(),
            stars: STAT_PLACEHOLDER.to_string(),
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("Followers", &self.followers),
            ("Following", &self.following),
            ("Repos", &self.repos),
            ("Stars", &self.stars),
        ]
    }
}

impl Default for StatCounters {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// One repository card.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoCard {
    pub name: String,
    pub url: String,
    /// Short last-updated date
    pub updated: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    /// At most [`MAX_CARD_TOPICS`] tags, without the `#`
    pub topics: Vec<String>,
}

impl RepoCard {
    pub fn from_repo(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            updated: repo.updated_at.as_ref().map(format_short_date),
            description: repo.description().map(str::to_string),
            language: repo.primary_language().map(str::to_string),
            stars: repo.stars(),
            forks: repo.forks(),
            topics: repo
                .topics
                .iter()
                .take(MAX_CARD_TOPICS)
                .cloned()
                .collect(),
        }
    }

    /// Topic tags as displayed (`#tag`).
    pub fn tag_labels(&self) -> impl Iterator<Item = String> + '_ {
        self.topics.iter().map(|t| format!("#{}", t))
    }
}

/// The repository region: either cards or the no-matches placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoListView {
    Cards(Vec<RepoCard>),
    NoMatches,
}

impl RepoListView {
    /// Filter, sort and project `repos` through `criteria`.
    pub fn build(repos: &[Repository], criteria: &FilterCriteria) -> Self {
        let list = filter_and_sort(repos, criteria);
        if list.is_empty() {
            RepoListView::NoMatches
        } else {
            RepoListView::Cards(list.into_iter().map(RepoCard::from_repo).collect())
        }
    }

    pub fn cards(&self) -> &[RepoCard] {
        match self {
            RepoListView::Cards(cards) => cards,
            RepoListView::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}
