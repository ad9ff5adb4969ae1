//! Stat counters: followers, following, repos, stars.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::controls::control_block;
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::render::StatCounters;

pub fn render_stats(frame: &mut Frame, stats: &StatCounters, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value), cell) in stats.entries().into_iter().zip(cells.iter()) {
        let line = Line::from(vec![
            Span::styled(
                value.to_string(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", label), Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(control_block("", false)),
            *cell,
        );
    }
}
