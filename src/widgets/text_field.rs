use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_TEXT};

/// Single-line text input with a character cursor.
///
/// The cursor is a character index, so multi-byte input edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    content: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field pre-filled with `content`, cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.set_content(content);
        field
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// First visible character so the cursor stays inside `width` cells.
    fn scroll_offset(&self, width: usize) -> usize {
        if width == 0 || self.cursor < width {
            0
        } else {
            self.cursor + 1 - width
        }
    }
}

/// Renders a [`TextField`] inside a rounded block.
pub struct TextFieldWidget<'a> {
    field: &'a TextField,
    title: &'a str,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(field: &'a TextField, title: &'a str, focused: bool) -> Self {
        Self {
            field,
            title,
            placeholder: None,
            focused,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused { COLOR_FOCUS } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        if self.field.is_empty() && !self.focused {
            if let Some(placeholder) = self.placeholder {
                buf.set_stringn(
                    inner.x,
                    inner.y,
                    placeholder,
                    width,
                    Style::default().fg(COLOR_DIM),
                );
            }
            return;
        }

        let offset = self.field.scroll_offset(width);
        let visible: String = self.field.content.chars().skip(offset).take(width).collect();
        buf.set_stringn(inner.x, inner.y, &visible, width, Style::default().fg(COLOR_TEXT));

        if self.focused {
            let cursor_x = (self.field.cursor - offset) as u16;
            if cursor_x < inner.width {
                let under = self.field.content.chars().nth(self.field.cursor).unwrap_or(' ');
                buf.set_string(
                    inner.x + cursor_x,
                    inner.y,
                    under.to_string(),
                    Style::default().add_modifier(Modifier::REVERSED),
                );
            }
        }
    }
}
