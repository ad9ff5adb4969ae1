//! Chart regions.
//!
//! The language chart is a proportion chart: one bar per language whose
//! length is its share, plus a legend. Top stars is a horizontal bar chart.

use ratatui::{
    layout::{Direction, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

use super::controls::control_block;
use super::helpers::clean;
use super::theme::{hex_color, COLOR_DIM, COLOR_TEXT};
use crate::charts::{LanguageHistogram, StarSeries, STARS_COLOR};

/// Cells reserved for a bar label in the top-stars chart.
const STAR_LABEL_WIDTH: usize = 14;

/// Cells reserved for a language name in the legend.
const LANGUAGE_LABEL_WIDTH: usize = 12;

pub fn render_languages(frame: &mut Frame, histogram: Option<&LanguageHistogram>, area: Rect) {
    if area.area() == 0 {
        return;
    }
    let block = control_block(" Languages ", false);
    let width = area.width.saturating_sub(2) as usize;
    let lines = match histogram {
        Some(h) if !h.is_empty() => language_lines(h, width),
        _ => vec![Line::from(Span::styled(
            " no data",
            Style::default().fg(COLOR_DIM),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Legend rows: color swatch, name, share bar, percentage.
pub fn language_lines(histogram: &LanguageHistogram, width: usize) -> Vec<Line<'static>> {
    // swatch(2) + label + space + bar + " 100%"(5)
    let bar_budget = width.saturating_sub(LANGUAGE_LABEL_WIDTH + 8);

    histogram
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let color = hex_color(histogram.colors[i]);
            let share = histogram.percent(i);
            let cells = ((share / 100.0) * bar_budget as f64).round() as usize;
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!(
                        "{:<w$}",
                        clean(label, LANGUAGE_LABEL_WIDTH),
                        w = LANGUAGE_LABEL_WIDTH
                    ),
                    Style::default().fg(COLOR_TEXT),
                ),
                Span::raw(" "),
                Span::styled("█".repeat(cells.max(1)), Style::default().fg(color)),
                Span::styled(format!(" {:.0}%", share), Style::default().fg(COLOR_DIM)),
            ])
        })
        .collect()
}

pub fn render_top_stars(frame: &mut Frame, series: Option<&StarSeries>, area: Rect) {
    if area.area() == 0 {
        return;
    }
    let block = control_block(" Top starred ", false);
    let Some(series) = series.filter(|s| !s.is_empty()) else {
        frame.render_widget(
            Paragraph::new(Span::styled(" no data", Style::default().fg(COLOR_DIM))).block(block),
            area,
        );
        return;
    };

    let color = hex_color(STARS_COLOR);
    let bars: Vec<Bar> = series
        .labels
        .iter()
        .zip(&series.values)
        .map(|(label, value)| {
            Bar::default()
                .value(*value)
                .label(Line::from(clean(label, STAR_LABEL_WIDTH)))
                .text_value(value.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}
