//! Responsive layout
//!
//! [`LayoutContext`] wraps the terminal size and answers layout questions;
//! [`DashboardAreas`] splits a frame into the dashboard's regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width and height breakpoints.
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Terminal dimensions for responsive decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short; labels and chips get condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Stack the profile above the stats and charts instead of side by side.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Hide the chart row entirely when there is no room for it.
    pub fn should_show_charts(&self) -> bool {
        self.height >= breakpoints::SM_HEIGHT
    }

    /// `(left, right)` widths for a two-column split.
    ///
    /// 50/50 below 60 columns, 40/60 below 120, then 35/65 capped at 60.
    pub fn two_column_widths(&self) -> (u16, u16) {
        if self.width < breakpoints::XS_WIDTH {
            let half = self.width / 2;
            (half, self.width - half)
        } else if self.width < breakpoints::MD_WIDTH {
            let left = (self.width * 40) / 100;
            (left, self.width - left)
        } else {
            let left = ((self.width * 35) / 100).min(60);
            (left, self.width - left)
        }
    }

    /// Height of the profile + stats + charts band.
    pub fn summary_height(&self) -> u16 {
        if self.is_short() {
            6
        } else {
            (self.height * 40 / 100).clamp(10, 16)
        }
    }
}

/// Regions of the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub username: Rect,
    pub search: Rect,
    pub sort: Rect,
    pub forks: Rect,
    pub profile: Rect,
    pub stats: Rect,
    /// Empty when charts are hidden
    pub languages: Rect,
    /// Empty when charts are hidden
    pub top_stars: Rect,
    pub repos: Rect,
    pub footer: Rect,
}

impl DashboardAreas {
    pub fn compute(area: Rect) -> Self {
        let ctx = LayoutContext::from_rect(area);
        let controls_height = if ctx.should_stack_panels() { 6 } else { 3 };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(controls_height),
                Constraint::Length(ctx.summary_height()),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let (username, search, sort, forks) = split_controls(rows[0], &ctx);
        let (profile, stats, languages, top_stars) = split_summary(rows[1], &ctx);

        Self {
            username,
            search,
            sort,
            forks,
            profile,
            stats,
            languages,
            top_stars,
            repos: rows[2],
            footer: rows[3],
        }
    }
}

fn split_controls(area: Rect, ctx: &LayoutContext) -> (Rect, Rect, Rect, Rect) {
    let fields = [
        Constraint::Percentage(25),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(15),
    ];
    if ctx.should_stack_panels() {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area);
        let top = halves(lines[0]);
        let bottom = halves(lines[1]);
        (top[0], top[1], bottom[0], bottom[1])
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(fields)
            .split(area);
        (cols[0], cols[1], cols[2], cols[3])
    }
}

fn split_summary(area: Rect, ctx: &LayoutContext) -> (Rect, Rect, Rect, Rect) {
    let (profile, right) = if ctx.should_stack_panels() {
        (area, Rect::new(area.x, area.y, 0, 0))
    } else {
        let (left_width, _) = ctx.two_column_widths();
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(left_width), Constraint::Min(0)])
            .split(area);
        (cols[0], cols[1])
    };

    if ctx.should_stack_panels() {
        // stats ride along under the profile, charts are dropped
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(profile);
        let empty = Rect::new(area.x, area.y, 0, 0);
        return (parts[0], parts[1], empty, empty);
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(right);
    if !ctx.should_show_charts() {
        let empty = Rect::new(right.x, right.y, 0, 0);
        let stats = Rect {
            height: right.height,
            ..parts[0]
        };
        return (profile, stats, empty, empty);
    }
    let charts = halves(parts[1]);
    (profile, parts[0], charts[0], charts[1])
}

fn halves(area: Rect) -> [Rect; 2] {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    [parts[0], parts[1]]
}
