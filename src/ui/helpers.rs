//! Helper functions for UI rendering
//!
//! Width-aware truncation and the text cleaning every API string passes
//! through before it reaches the cell grid.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::render::sanitize_text;

/// Truncate to at most `max_width` terminal cells, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Sanitize API text and fit it into `max_width` cells.
pub fn clean(text: &str, max_width: usize) -> String {
    truncate_to_width(&sanitize_text(text), max_width)
}
