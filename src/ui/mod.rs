//! UI rendering for the ghtrack dashboard
//!
//! One screen:
//! - Control row: username, search, sort selector, fork-only toggle
//! - Summary band: profile panel, stat counters, two charts
//! - Repository card list
//! - Footer with key hints (or the last notice)

pub mod charts;
pub mod components;
pub mod controls;
pub mod helpers;
pub mod layout;
pub mod profile;
pub mod repos;
pub mod stats;
pub mod theme;

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use layout::DashboardAreas;
use theme::COLOR_DIM;

/// Draw the whole dashboard.
pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = DashboardAreas::compute(frame.area());

    controls::render_controls(frame, app, &areas);
    profile::render_profile(frame, app, areas.profile);
    stats::render_stats(frame, app.view.stats(), areas.stats);
    charts::render_languages(frame, app.view.languages(), areas.languages);
    charts::render_top_stars(frame, app.view.top_stars(), areas.top_stars);
    repos::render_repos(frame, app, areas.repos);

    let footer = match &app.notice {
        Some(notice) => helpers::clean(notice, areas.footer.width as usize),
        None => footer_hint(app.focus).to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            footer,
            Style::default().fg(COLOR_DIM),
        ))),
        areas.footer,
    );
}

/// Key hints for the focused control.
pub fn footer_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Username => "enter load · tab next · esc list",
        Focus::Search => "type to filter · enter list · tab next · esc list",
        Focus::Sort => "←/→ sort · tab next · esc quit",
        Focus::ForksOnly => "space toggle forks · tab next · esc quit",
        Focus::Repos => "↑/↓ select · enter open · b blog · / search · esc quit",
    }
}
