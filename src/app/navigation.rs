//! Focus, list selection and control changes.

use tracing::debug;

use super::{App, Focus};

/// Cards moved by PageUp/PageDown when the region size is unknown.
const DEFAULT_PAGE: usize = 5;

impl App {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Number of cards in the filtered list.
    pub fn card_count(&self) -> usize {
        self.repo_list().map(|list| list.len()).unwrap_or(0)
    }

    fn page_size(&self) -> usize {
        if self.visible_cards > 0 {
            self.visible_cards
        } else {
            DEFAULT_PAGE
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selected_visible();
    }

    pub fn select_next(&mut self) {
        let count = self.card_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
        self.ensure_selected_visible();
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size());
        self.ensure_selected_visible();
    }

    pub fn page_down(&mut self) {
        let last = self.card_count().saturating_sub(1);
        self.selected = (self.selected + self.page_size()).min(last);
        self.ensure_selected_visible();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.ensure_selected_visible();
    }

    pub fn select_last(&mut self) {
        self.selected = self.card_count().saturating_sub(1);
        self.ensure_selected_visible();
    }

    /// Keep the selection inside the list after it shrank.
    pub fn clamp_selection(&mut self) {
        let count = self.card_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
        self.ensure_selected_visible();
    }

    /// Scroll so the selected card is inside the visible window.
    pub fn ensure_selected_visible(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        let window = self.page_size();
        if self.selected >= self.scroll_offset + window {
            self.scroll_offset = self.selected + 1 - window;
        }
    }

    /// Cycle the sort selector.
    pub fn cycle_sort(&mut self, forward: bool) {
        self.sort = if forward {
            self.sort.next()
        } else {
            self.sort.prev()
        };
        debug!(sort = self.sort.as_str(), "Sort changed");
        self.reset_selection();
    }

    pub fn toggle_forks_only(&mut self) {
        self.forks_only = !self.forks_only;
        debug!(forks_only = self.forks_only, "Fork filter changed");
        self.reset_selection();
    }

    /// Called after the search text changed.
    pub fn search_changed(&mut self) {
        debug!(query = self.search.content(), "Search changed");
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
        self.mark_dirty();
    }

    /// Jump focus to the repository list.
    pub fn focus_repos(&mut self) {
        self.focus = Focus::Repos;
    }
}
