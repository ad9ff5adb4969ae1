//! Color theme constants for the dashboard.

use ratatui::style::Color;

// ============================================================================
// Base palette
// ============================================================================

/// Unfocused borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused control
pub const COLOR_FOCUS: Color = Color::Rgb(96, 165, 250); // #60a5fa

/// Primary text
pub const COLOR_TEXT: Color = Color::Rgb(226, 232, 240); // #e2e8f0

/// Muted text (login handle, dates, hints)
pub const COLOR_DIM: Color = Color::Rgb(148, 163, 184); // #94a3b8

/// Highlights and selected markers
pub const COLOR_ACCENT: Color = Color::White;

/// Inline fetch errors
pub const COLOR_ERROR: Color = Color::Rgb(251, 113, 133); // #fb7185

/// Spinner while loading
pub const COLOR_LOADING: Color = Color::Yellow;

/// Background of the selected repository card
pub const COLOR_SELECTED_BG: Color = Color::Rgb(17, 26, 51); // #111a33

// ============================================================================
// Badges
// ============================================================================

pub const COLOR_STAR: Color = Color::Rgb(245, 158, 11); // #f59e0b

pub const COLOR_FORK: Color = Color::Rgb(52, 211, 153); // #34d399

pub const COLOR_TOPIC: Color = Color::Rgb(167, 139, 250); // #a78bfa

pub const COLOR_LANGUAGE: Color = Color::Rgb(34, 211, 238); // #22d3ee

/// Parse a `#rrggbb` chart color, falling back to gray.
pub fn hex_color(hex: &str) -> Color {
    hex.parse().unwrap_or(Color::Gray)
}
