//! Profile region: skeleton while loading, the inline error after a failure,
//! otherwise name, handle, bio and chips.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::controls::control_block;
use super::helpers::clean;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_TEXT};
use crate::app::App;
use crate::render::{Chip, ProfileView};
use crate::state::LoadStatus;

const SKELETON_ROWS: [u16; 3] = [18, 12, 24];

pub fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let lines = match app.view.status() {
        LoadStatus::Loading { username } => loading_lines(username, app.spinner_frame, width),
        LoadStatus::Failed(message) => {
            render_status_indicator(&StatusIndicatorType::error(clean(message, width)))
        }
        LoadStatus::Idle => render_status_indicator(&StatusIndicatorType::info(
            "Type a username and press Enter",
        )),
        LoadStatus::Ready => app
            .view
            .profile_view()
            .map(|profile| profile_lines(&profile, width))
            .unwrap_or_default(),
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(control_block(" Profile ", false))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn loading_lines(username: &str, frame: usize, width: usize) -> Vec<Line<'static>> {
    let message = clean(&format!("Loading {}…", username), width.saturating_sub(3));
    let mut lines = render_status_indicator(&StatusIndicatorType::spinner(message, frame));
    for cells in SKELETON_ROWS {
        let cells = (cells as usize).min(width.saturating_sub(1));
        lines.push(Line::from(Span::styled(
            format!(" {}", "░".repeat(cells)),
            Style::default().fg(COLOR_BORDER),
        )));
    }
    lines
}

/// Lines for a loaded profile; every API string is cleaned first.
pub fn profile_lines(profile: &ProfileView, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            clean(&profile.display_name, width),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            clean(&format!("@{}", profile.login), width),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    if let Some(bio) = &profile.bio {
        lines.push(Line::from(""));
        // bio wraps; only control characters are stripped
        lines.push(Line::from(Span::styled(
            crate::render::sanitize_text(bio),
            Style::default().fg(COLOR_TEXT),
        )));
    }

    lines.push(Line::from(""));
    for chip in &profile.chips {
        let style = match chip {
            Chip::Link { .. } => Style::default()
                .fg(COLOR_FOCUS)
                .add_modifier(Modifier::UNDERLINED),
            _ => Style::default().fg(COLOR_TEXT),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", chip.icon()), Style::default().fg(COLOR_DIM)),
            Span::styled(clean(&chip.text(), width.saturating_sub(2)), style),
        ]));
    }
    lines
}
