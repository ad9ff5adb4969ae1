//! Aggregate views derived from a repository list.

use std::collections::HashMap;

use crate::models::Repository;

/// Fixed cyclic palette for language slices.
pub const PALETTE: [&str; 12] = [
    "#60a5fa", "#34d399", "#f472b6", "#f59e0b", "#a78bfa", "#22d3ee", "#fb7185", "#84cc16",
    "#e879f9", "#38bdf8", "#f43f5e", "#10b981",
];

/// Single series color for the top-stars bars.
pub const STARS_COLOR: &str = "#6366f1";

/// Maximum number of bars in the top-stars chart.
pub const TOP_STARS_LIMIT: usize = 10;

/// Palette color for the `index`-th label.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Repository count per primary language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageHistogram {
    /// Language names in first-seen order
    pub labels: Vec<String>,
    /// Repository count per label
    pub counts: Vec<u64>,
    /// Palette color per label
    pub colors: Vec<&'static str>,
}

impl LanguageHistogram {
    /// Count repositories per non-empty primary language.
    ///
    /// Labels keep the order in which each language first appears in `repos`.
    pub fn from_repos(repos: &[Repository]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut labels = Vec::new();
        let mut counts: Vec<u64> = Vec::new();

        for lang in repos.iter().filter_map(Repository::primary_language) {
            match index.get(lang) {
                Some(&i) => counts[i] += 1,
                None => {
                    index.insert(lang, labels.len());
                    labels.push(lang.to_string());
                    counts.push(1);
                }
            }
        }

        let colors = (0..labels.len()).map(palette_color).collect();
        Self {
            labels,
            counts,
            colors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of label `i` in percent, 0.0 when there is no data.
    pub fn percent(&self, i: usize) -> f64 {
        let total = self.total();
        match self.counts.get(i) {
            Some(&count) if total > 0 => count as f64 * 100.0 / total as f64,
            _ => 0.0,
        }
    }
}

/// Top repositories by star count as a bar series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarSeries {
    /// Repository names, most starred first
    pub labels: Vec<String>,
    /// Star counts, non-increasing
    pub values: Vec<u64>,
}

impl StarSeries {
    /// Sort a copy of `repos` by stars descending and keep the first
    /// [`TOP_STARS_LIMIT`]. Equal counts keep their input order.
    pub fn from_repos(repos: &[Repository]) -> Self {
        let mut ranked: Vec<&Repository> = repos.iter().collect();
        ranked.sort_by(|a, b| b.stars().cmp(&a.stars()));
        ranked.truncate(TOP_STARS_LIMIT);

        Self {
            labels: ranked.iter().map(|r| r.name.clone()).collect(),
            values: ranked.iter().map(|r| r.stars()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, lang: Option<&str>, stars: Option<u64>) -> Repository {
        Repository {
            name: name.to_string(),
            language: lang.map(str::to_string),
            stargazers_count: stars,
            ..Default::default()
        }
    }

    #[test]
    fn test_histogram_first_seen_order() {
        let repos = vec![
            repo("a", Some("Rust"), None),
            repo("b", Some("Go"), None),
            repo("c", None, None),
            repo("d", Some("Rust"), None),
            repo("e", Some(""), None),
            repo("f", Some("C"), None),
        ];

        let hist = LanguageHistogram::from_repos(&repos);
        assert_eq!(hist.labels, vec!["Rust", "Go", "C"]);
        assert_eq!(hist.counts, vec![2, 1, 1]);
        assert_eq!(hist.colors, vec![PALETTE[0], PALETTE[1], PALETTE[2]]);
        assert_eq!(hist.total(), 4);
        assert!((hist.percent(0) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_palette_wraps() {
        let repos: Vec<Repository> = (0..14)
            .map(|i| repo(&format!("r{i}"), Some(&format!("L{i}")), None))
            .collect();
        let hist = LanguageHistogram::from_repos(&repos);
        assert_eq!(hist.colors.len(), 14);
        assert_eq!(hist.colors[12], PALETTE[0]);
        assert_eq!(hist.colors[13], PALETTE[1]);
    }

    #[test]
    fn test_histogram_empty() {
        let hist = LanguageHistogram::from_repos(&[]);
        assert!(hist.is_empty());
        assert_eq!(hist.percent(0), 0.0);
    }

    #[test]
    fn test_top_stars_limit_and_order() {
        let repos: Vec<Repository> = (0..15u64)
            .map(|i| repo(&format!("r{i}"), None, Some((i * 7) % 11)))
            .collect();

        let series = StarSeries::from_repos(&repos);
        assert_eq!(series.len(), TOP_STARS_LIMIT);
        assert!(series.values.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(series.max(), 10);
    }

    #[test]
    fn test_top_stars_missing_counts_as_zero() {
        let repos = vec![repo("none", None, None), repo("five", None, Some(5))];
        let series = StarSeries::from_repos(&repos);
        assert_eq!(series.labels, vec!["five", "none"]);
        assert_eq!(series.values, vec![5, 0]);
    }

    #[test]
    fn test_top_stars_does_not_reorder_input() {
        let repos = vec![repo("low", None, Some(1)), repo("high", None, Some(9))];
        let _ = StarSeries::from_repos(&repos);
        assert_eq!(repos[0].name, "low");
    }
}
