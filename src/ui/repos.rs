//! Repository card list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::controls::control_block;
use super::helpers::clean;
use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_FORK, COLOR_LANGUAGE, COLOR_SELECTED_BG, COLOR_STAR,
    COLOR_TEXT, COLOR_TOPIC,
};
use crate::app::{App, Focus};
use crate::render::{RepoCard, RepoListView, NO_MATCHES_TEXT};

/// Rows per card: title, description, badges.
pub const CARD_HEIGHT: u16 = 3;

/// Render the list and record how many cards fit.
pub fn render_repos(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Repos;
    let list = app.repo_list();
    let title = match &list {
        Some(list) => format!(" Repositories ({}) ", list.len()),
        None => " Repositories ".to_string(),
    };
    let block = control_block(&title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.visible_cards = (inner.height / CARD_HEIGHT).max(1) as usize;
    app.ensure_selected_visible();

    let lines = match list {
        // loading, failed or idle: the region stays empty
        None => Vec::new(),
        Some(RepoListView::NoMatches) => vec![Line::from(Span::styled(
            NO_MATCHES_TEXT,
            Style::default().fg(COLOR_DIM),
        ))],
        Some(RepoListView::Cards(cards)) => cards
            .iter()
            .enumerate()
            .skip(app.scroll_offset)
            .take(app.visible_cards)
            .flat_map(|(i, card)| {
                card_lines(card, inner.width as usize, focused && i == app.selected)
            })
            .collect(),
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Three lines for one card.
pub fn card_lines(card: &RepoCard, width: usize, selected: bool) -> Vec<Line<'static>> {
    let base = if selected {
        Style::default().bg(COLOR_SELECTED_BG)
    } else {
        Style::default()
    };
    let marker = if selected { "▸ " } else { "  " };

    let updated = card.updated.clone().unwrap_or_default();
    let name_width = width.saturating_sub(updated.width() + 3);
    let name = clean(&card.name, name_width);
    let pad = width.saturating_sub(2 + name.width() + updated.width());
    let title = Line::from(vec![
        Span::styled(marker, base.fg(COLOR_ACCENT)),
        Span::styled(name, base.fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(" ".repeat(pad), base),
        Span::styled(updated, base.fg(COLOR_DIM)),
    ]);

    let description = Line::from(Span::styled(
        format!(
            "  {}",
            clean(card.description.as_deref().unwrap_or(""), width.saturating_sub(2))
        ),
        base.fg(COLOR_TEXT),
    ));

    let mut badges = vec![Span::styled("  ", base)];
    if let Some(language) = &card.language {
        badges.push(Span::styled(
            format!("{} ", clean(language, 16)),
            base.fg(COLOR_LANGUAGE),
        ));
    }
    badges.push(Span::styled(format!("★ {} ", card.stars), base.fg(COLOR_STAR)));
    badges.push(Span::styled(format!("⑂ {} ", card.forks), base.fg(COLOR_FORK)));
    for tag in card.tag_labels() {
        badges.push(Span::styled(format!("{} ", clean(&tag, 20)), base.fg(COLOR_TOPIC)));
    }

    vec![title, description, Line::from(badges)]
}
