//! Data models for the GitHub REST API payloads the dashboard consumes.

mod profile;
mod repository;

pub use profile::Profile;
pub use repository::Repository;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The result of one successful fetch cycle.
///
/// Profile and repositories always travel together so that the view state can
/// never hold one without the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSnapshot {
    pub profile: Profile,
    /// Repositories in API order (most recently updated first)
    pub repos: Vec<Repository>,
}

impl UserSnapshot {
    pub fn new(profile: Profile, repos: Vec<Repository>) -> Self {
        Self { profile, repos }
    }

    /// Sum of star counts across all repositories, missing counts as zero.
    pub fn total_stars(&self) -> u64 {
        total_stars(&self.repos)
    }
}

/// Sum of star counts, missing counts as zero.
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(Repository::stars).sum()
}
