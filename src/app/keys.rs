//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Focus};

impl App {
    /// Apply one key press to the focused control.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            // Esc leaves a text field first, then quits
            KeyCode::Esc if self.focus.is_text_input() => {
                self.focus_repos();
                return;
            }
            KeyCode::Esc => {
                self.quit();
                return;
            }
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Username => self.handle_username_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::Sort => match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.cycle_sort(false),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => self.cycle_sort(true),
                _ => {}
            },
            Focus::ForksOnly => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.toggle_forks_only();
                }
            }
            Focus::Repos => self.handle_repos_key(key),
        }
    }

    fn handle_username_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit();
            }
            code => edit_field(&mut self.username, code, key.modifiers),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Down => self.focus_repos(),
            code => {
                let before = self.search.content().to_string();
                edit_field(&mut self.search, code, key.modifiers);
                if self.search.content() != before {
                    self.search_changed();
                }
            }
        }
    }

    fn handle_repos_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Enter | KeyCode::Char('o') => {
                self.open_selected();
            }
            KeyCode::Char('b') => {
                self.open_profile_link();
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            _ => {}
        }
    }
}

impl App {
    /// Insert pasted text into the focused input; line breaks are dropped.
    pub fn handle_paste(&mut self, text: &str) {
        let field = match self.focus {
            Focus::Username => &mut self.username,
            Focus::Search => &mut self.search,
            _ => return,
        };
        for c in text.chars().filter(|c| !c.is_control()) {
            field.insert_char(c);
        }
        if self.focus == Focus::Search {
            self.search_changed();
        }
        self.mark_dirty();
    }
}

fn edit_field(field: &mut crate::widgets::TextField, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => field.clear(),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => field.insert_char(c),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete_char(),
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.move_cursor_home(),
        KeyCode::End => field.move_cursor_end(),
        _ => {}
    }
}
