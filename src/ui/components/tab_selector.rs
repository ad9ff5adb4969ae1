//! Tab Selector Component
//!
//! Horizontal selector with a `▶` marker on the chosen item. Drives the sort
//! control; compact terminals get the short labels.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::render::SortKey;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_TEXT};

/// A single selector entry.
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    pub id: &'a str,
    /// Label on normal-sized terminals
    pub label: &'a str,
    /// Label on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(id: &'a str, label: &'a str) -> Self {
        Self {
            id,
            label,
            short_label: label,
        }
    }

    pub fn with_short_label(id: &'a str, label: &'a str, short_label: &'a str) -> Self {
        Self {
            id,
            label,
            short_label,
        }
    }
}

/// Selector entries for every sort key, in cycling order.
pub fn sort_items() -> Vec<TabItem<'static>> {
    SortKey::ALL
        .iter()
        .map(|key| match key {
            SortKey::Updated => TabItem::with_short_label(key.as_str(), key.label(), "Updated"),
            _ => TabItem::new(key.as_str(), key.label()),
        })
        .collect()
}

/// Render the selector as one line.
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let spacing = if ctx.is_compact() { " " } else { "  " };

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            let marker_style = if focused {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let mut text_style = Style::default().fg(COLOR_TEXT);
            if focused {
                text_style = text_style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled("▶ ", marker_style));
            spans.push(Span::styled(label.to_string(), text_style));
        } else {
            spans.push(Span::styled(
                format!("  {}", label),
                Style::default().fg(COLOR_DIM),
            ));
        }

        if idx + 1 < items.len() {
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
