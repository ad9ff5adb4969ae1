//! Control row: username, search, sort selector and the fork-only toggle.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::components::{render_tab_selector, sort_items};
use super::layout::{DashboardAreas, LayoutContext};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_TEXT};
use crate::app::{App, Focus};
use crate::widgets::TextFieldWidget;

pub(super) fn control_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { COLOR_FOCUS } else { COLOR_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(COLOR_DIM)))
}

pub fn render_controls(frame: &mut Frame, app: &App, areas: &DashboardAreas) {
    let username = TextFieldWidget::new(&app.username, " Username ", app.focus == Focus::Username)
        .placeholder("GitHub username");
    frame.render_widget(username, areas.username);

    let search = TextFieldWidget::new(&app.search, " Search ", app.focus == Focus::Search)
        .placeholder("name or description");
    frame.render_widget(search, areas.search);

    render_sort(frame, app, areas.sort);
    render_forks_toggle(frame, app, areas.forks);
}

fn render_sort(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Sort;
    let ctx = LayoutContext::from_rect(frame.area());
    let line = render_tab_selector(&sort_items(), app.sort.index(), focused, &ctx);
    frame.render_widget(
        Paragraph::new(line).block(control_block(" Sort ", focused)),
        area,
    );
}

fn render_forks_toggle(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::ForksOnly;
    let mark = if app.forks_only { "[x]" } else { "[ ]" };
    let mark_style = if app.forks_only {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(" Forks", Style::default().fg(COLOR_TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(control_block(" Filter ", focused)),
        area,
    );
}
