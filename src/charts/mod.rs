//! Chart projection.
//!
//! Derives the language histogram and the top-stars series from a repository
//! list and (re)initializes the two chart slots the view state owns.

mod projection;
mod slot;

pub use projection::{
    palette_color, LanguageHistogram, StarSeries, PALETTE, STARS_COLOR, TOP_STARS_LIMIT,
};
pub use slot::{ChartEngine, ChartInstance, ChartKind, ChartSlot, ChartSpec};

use crate::models::Repository;

/// The dashboard's two chart slots.
#[derive(Debug)]
pub struct ChartSet {
    engine: ChartEngine,
    languages: ChartSlot,
    stars: ChartSlot,
}

impl Default for ChartSet {
    fn default() -> Self {
        Self::new(ChartEngine::new())
    }
}

impl ChartSet {
    pub fn new(engine: ChartEngine) -> Self {
        Self {
            engine,
            languages: ChartSlot::new(ChartKind::Languages),
            stars: ChartSlot::new(ChartKind::TopStars),
        }
    }

    /// Rebuild the language chart from `repos`.
    pub fn project_languages(&mut self, repos: &[Repository]) {
        self.languages.release();
        let histogram = LanguageHistogram::from_repos(repos);
        self.languages
            .install(self.engine.create(ChartSpec::Doughnut(histogram)));
    }

    /// Rebuild the top-stars chart from `repos`.
    pub fn project_top_stars(&mut self, repos: &[Repository]) {
        self.stars.release();
        let series = StarSeries::from_repos(repos);
        self.stars.install(self.engine.create(ChartSpec::Bar(series)));
    }

    /// Rebuild both charts.
    pub fn project_all(&mut self, repos: &[Repository]) {
        self.project_languages(repos);
        self.project_top_stars(repos);
    }

    /// Dispose both charts and leave the slots empty.
    pub fn clear(&mut self) {
        let languages = self.languages.release();
        let stars = self.stars.release();
        tracing::debug!(languages, stars, "Charts cleared");
    }

    /// Current language histogram, if the slot is populated.
    pub fn languages(&self) -> Option<&LanguageHistogram> {
        match self.languages.get().map(ChartInstance::spec) {
            Some(ChartSpec::Doughnut(histogram)) => Some(histogram),
            _ => None,
        }
    }

    /// Current top-stars series, if the slot is populated.
    pub fn top_stars(&self) -> Option<&StarSeries> {
        match self.stars.get().map(ChartInstance::spec) {
            Some(ChartSpec::Bar(series)) => Some(series),
            _ => None,
        }
    }

    /// Live chart instances across both slots.
    pub fn live_count(&self) -> usize {
        self.engine.live_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos() -> Vec<Repository> {
        vec![
            Repository {
                name: "a".to_string(),
                language: Some("Rust".to_string()),
                stargazers_count: Some(3),
                ..Default::default()
            },
            Repository {
                name: "b".to_string(),
                language: Some("Go".to_string()),
                stargazers_count: Some(7),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut charts = ChartSet::default();
        charts.project_all(&repos());
        let first_lang = charts.languages().cloned();
        let first_stars = charts.top_stars().cloned();

        charts.project_all(&repos());
        assert_eq!(charts.languages().cloned(), first_lang);
        assert_eq!(charts.top_stars().cloned(), first_stars);
        assert_eq!(charts.live_count(), 2);
    }

    #[test]
    fn test_reprojection_replaces_instances() {
        let mut charts = ChartSet::default();
        charts.project_languages(&repos());
        let first = charts.languages.get().map(ChartInstance::id);
        charts.project_languages(&repos());
        let second = charts.languages.get().map(ChartInstance::id);

        assert_ne!(first, second);
        assert_eq!(charts.live_count(), 1);
    }

    #[test]
    fn test_clear_disposes_everything() {
        let mut charts = ChartSet::default();
        charts.project_all(&repos());
        charts.clear();

        assert!(charts.languages().is_none());
        assert!(charts.top_stars().is_none());
        assert_eq!(charts.live_count(), 0);

        // clearing empty slots is harmless
        charts.clear();
        assert_eq!(charts.live_count(), 0);
    }

    #[test]
    fn test_top_stars_series_contents() {
        let mut charts = ChartSet::default();
        charts.project_top_stars(&repos());
        let series = charts.top_stars().unwrap();
        assert_eq!(series.labels, vec!["b", "a"]);
        assert_eq!(series.values, vec![7, 3]);
    }
}
