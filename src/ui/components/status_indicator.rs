//! Status Indicator Component
//!
//! Spinner, error and info lines shown in the profile region.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Inline fetch error
    Error { message: String },
    /// Muted hint
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Spinner character for `frame`.
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Advance the spinner frame.
pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

/// Render an indicator as lines (blank line above for breathing room).
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    let body = match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!(" {} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_LOADING),
            ),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_LOADING)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Error { message } => Line::from(vec![
            Span::styled(" \u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(
                message.clone(),
                Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Info { message } => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(COLOR_DIM),
        )),
    };
    vec![Line::from(""), body]
}
