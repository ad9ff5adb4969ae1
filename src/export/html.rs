//! Static HTML rendering of a committed view state.
//!
//! Every API-supplied string goes through [`escape_html`]; URLs are only
//! placed inside quoted attributes after escaping as well.

use std::fmt::Write;

use crate::charts::{LanguageHistogram, StarSeries, STARS_COLOR};
use crate::render::{
    escape_html, Chip, FilterCriteria, ProfileView, RepoCard, RepoListView, StatCounters,
    NO_MATCHES_TEXT,
};
use crate::state::ViewState;

/// Document head with the inline stylesheet.
const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ghtrack</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0b1020; color: #e2e8f0; margin: 0; padding: 24px; }
        a { color: #60a5fa; text-decoration: none; }
        .muted { color: #94a3b8; }
        .profile { display: flex; gap: 16px; align-items: center; }
        .avatar { width: 96px; height: 96px; border-radius: 50%; }
        .name { font-size: 22px; font-weight: 600; }
        .chips, .badges { display: flex; flex-wrap: wrap; gap: 6px; margin-top: 8px; }
        .chip, .badge { background: #111a33; border: 1px solid #1e293b; border-radius: 999px; padding: 2px 10px; font-size: 12px; }
        .stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin: 20px 0; }
        .stat { background: #111a33; border-radius: 12px; padding: 12px; }
        .stat .value { font-size: 24px; font-weight: 700; }
        .charts { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
        .chart { background: #111a33; border-radius: 12px; padding: 12px; }
        .bar { height: 10px; border-radius: 4px; }
        .repos { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 12px; margin-top: 20px; }
        .repo { background: #111a33; border-radius: 12px; padding: 12px; }
        .repo .title { display: flex; justify-content: space-between; }
        .error { color: #fb7185; }
    </style>
</head>
<body>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Render the whole page for `state` with the given list controls.
pub fn render_document(state: &ViewState, criteria: &FilterCriteria) -> String {
    let mut out = String::from(PAGE_HEAD);

    match (state.profile_view(), state.error()) {
        (Some(profile), _) => render_profile(&mut out, &profile),
        (None, Some(message)) => {
            let _ = writeln!(out, "<div class=\"error\">{}</div>", escape_html(message));
        }
        (None, None) => out.push_str("<div class=\"skeleton\"></div>\n"),
    }

    render_stats(&mut out, state.stats());

    out.push_str("<section class=\"charts\">\n");
    if let Some(histogram) = state.languages() {
        render_languages(&mut out, histogram);
    }
    if let Some(series) = state.top_stars() {
        render_top_stars(&mut out, series);
    }
    out.push_str("</section>\n");

    out.push_str("<section class=\"repos\">\n");
    if let Some(list) = state.repo_list(criteria) {
        render_repo_list(&mut out, &list);
    }
    out.push_str("</section>\n");

    out.push_str(PAGE_TAIL);
    out
}

fn render_profile(out: &mut String, profile: &ProfileView) {
    let login = escape_html(&profile.login);
    let _ = writeln!(out, "<div class=\"profile\">");
    let _ = writeln!(
        out,
        "  <img class=\"avatar\" src=\"{}\" alt=\"{} avatar\" />",
        escape_html(&profile.avatar_url),
        login
    );
    let _ = writeln!(out, "  <div>");
    let _ = writeln!(
        out,
        "    <div class=\"name\">{}</div>",
        escape_html(&profile.display_name)
    );
    let _ = writeln!(out, "    <div class=\"muted\">@{}</div>", login);
    if let Some(bio) = &profile.bio {
        let _ = writeln!(out, "    <div class=\"muted\">{}</div>", escape_html(bio));
    }
    let _ = writeln!(out, "    <div class=\"chips\">");
    for chip in &profile.chips {
        let body = match chip {
            Chip::Link { text, href } => format!(
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                escape_html(href),
                escape_html(text)
            ),
            other => escape_html(&other.text()),
        };
        let _ = writeln!(out, "      <span class=\"chip\">{}</span>", body);
    }
    let _ = writeln!(out, "    </div>\n  </div>\n</div>");
}

fn render_stats(out: &mut String, stats: &StatCounters) {
    out.push_str("<section class=\"stats\">\n");
    for (label, value) in stats.entries() {
        let _ = writeln!(
            out,
            "  <div class=\"stat\"><div class=\"muted\">{}</div><div class=\"value\">{}</div></div>",
            label,
            escape_html(value)
        );
    }
    out.push_str("</section>\n");
}

fn render_languages(out: &mut String, histogram: &LanguageHistogram) {
    out.push_str("<div class=\"chart\" data-chart=\"languages\">\n  <div class=\"muted\">Languages</div>\n");
    for (i, label) in histogram.labels.iter().enumerate() {
        let _ = writeln!(
            out,
            "  <div class=\"legend\"><span class=\"bar\" style=\"background:{};width:{:.1}%;display:inline-block\"></span> {} ({})</div>",
            histogram.colors[i],
            histogram.percent(i),
            escape_html(label),
            histogram.counts[i]
        );
    }
    out.push_str("</div>\n");
}

fn render_top_stars(out: &mut String, series: &StarSeries) {
    let max = series.max().max(1);
    out.push_str("<div class=\"chart\" data-chart=\"stars\">\n  <div class=\"muted\">Top starred</div>\n");
    for (label, value) in series.labels.iter().zip(&series.values) {
        let width = *value as f64 * 100.0 / max as f64;
        let _ = writeln!(
            out,
            "  <div>{} <span class=\"bar\" style=\"background:{};width:{:.1}%;display:inline-block\"></span> {}</div>",
            escape_html(label),
            STARS_COLOR,
            width,
            value
        );
    }
    out.push_str("</div>\n");
}

fn render_repo_list(out: &mut String, list: &RepoListView) {
    match list {
        RepoListView::NoMatches => {
            let _ = writeln!(out, "<div class=\"muted\">{}</div>", NO_MATCHES_TEXT);
        }
        RepoListView::Cards(cards) => cards.iter().for_each(|card| render_card(out, card)),
    }
}

fn render_card(out: &mut String, card: &RepoCard) {
    let _ = writeln!(out, "<article class=\"repo\">");
    let _ = writeln!(
        out,
        "  <div class=\"title\"><a href=\"{}\" target=\"_blank\">{}</a><span class=\"muted\">{}</span></div>",
        escape_html(&card.url),
        escape_html(&card.name),
        card.updated.as_deref().unwrap_or("")
    );
    if let Some(description) = &card.description {
        let _ = writeln!(out, "  <div class=\"desc\">{}</div>", escape_html(description));
    }
    out.push_str("  <div class=\"badges\">");
    if let Some(language) = &card.language {
        let _ = write!(out, "<span class=\"badge\">{}</span>", escape_html(language));
    }
    let _ = write!(
        out,
        "<span class=\"badge\">\u{2605} {}</span><span class=\"badge\">\u{2442} {}</span>",
        card.stars, card.forks
    );
    for tag in card.tag_labels() {
        let _ = write!(out, "<span class=\"badge\">{}</span>", escape_html(&tag));
    }
    out.push_str("</div>\n</article>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, Repository, UserSnapshot};

    fn hostile_state() -> ViewState {
        let profile = Profile {
            login: "octocat".to_string(),
            bio: Some("<script>alert(1)</script>".to_string()),
            company: Some("Tom & Jerry".to_string()),
            blog: Some("example.com/\"onmouseover".to_string()),
            ..Default::default()
        };
        let repos = vec![Repository {
            name: "<b>repo</b>".to_string(),
            description: Some("it's \"quoted\"".to_string()),
            language: Some("C<++>".to_string()),
            topics: vec!["<tag>".to_string()],
            stargazers_count: Some(3),
            ..Default::default()
        }];
        let mut state = ViewState::new();
        state.replace(UserSnapshot::new(profile, repos));
        state
    }

    #[test]
    fn test_api_text_is_escaped() {
        let html = render_document(&hostile_state(), &FilterCriteria::default());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("https://example.com/&quot;onmouseover"));
        assert!(html.contains("&lt;b&gt;repo&lt;/b&gt;"));
        assert!(html.contains("it&#39;s &quot;quoted&quot;"));
        assert!(html.contains("C&lt;++&gt;"));
        assert!(html.contains("#&lt;tag&gt;"));
    }

    #[test]
    fn test_no_matches_placeholder() {
        let criteria = FilterCriteria::new("nothing-matches-this", false, Default::default());
        let html = render_document(&hostile_state(), &criteria);
        assert!(html.contains(NO_MATCHES_TEXT));
    }

    #[test]
    fn test_failed_state_renders_error_and_placeholders() {
        let mut state = hostile_state();
        state.reset("User fetch failed: 500");
        let html = render_document(&state, &FilterCriteria::default());
        assert!(html.contains("<div class=\"error\">User fetch failed: 500</div>"));
        assert!(!html.contains("data-chart"));
        assert!(!html.contains("<article"));
        assert_eq!(html.matches("<div class=\"value\">\u{2014}</div>").count(), 4);
    }
}
