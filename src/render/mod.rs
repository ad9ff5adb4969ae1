//! Render pipeline.
//!
//! Pure functions from view state plus the current controls to view models:
//! profile panel, stat counters and repository cards. Drawing is left to the
//! `ui` (terminal) and `export` (HTML) modules.

mod filter;
mod format;
mod view;

pub use filter::{compare_names, filter_and_sort, filter_forks, filter_query, FilterCriteria, SortKey};
pub use format::{
    escape_html, format_long_date, format_num, format_short_date, format_url, sanitize_text,
    STAT_PLACEHOLDER,
};
pub use view::{Chip, ProfileView, RepoCard, RepoListView, StatCounters, MAX_CARD_TOPICS, NO_MATCHES_TEXT};
