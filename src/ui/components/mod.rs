//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal selector with an arrow marker (sort control)
//! - `StatusIndicator` - Spinner, error and info lines

mod status_indicator;
mod tab_selector;

pub use status_indicator::{
    get_spinner_char, next_spinner_frame, render_status_indicator, StatusIndicatorType,
};
pub use tab_selector::{render_tab_selector, sort_items, TabItem};
