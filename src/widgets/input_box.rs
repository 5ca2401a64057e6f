use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Single-line text input for player actions.
///
/// The cursor is a character index, so accented Portuguese input edits one
/// visible character at a time. The view scrolls horizontally by display
/// width to keep the cursor visible.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Cursor position in characters
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Insert pasted text, dropping line breaks
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Delete the character under the cursor (Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete the character before the cursor (Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replace the content and put the cursor at the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    /// Take the content, leaving the box empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// First visible character so the cursor fits in `width` columns.
    fn scroll_offset(&self, width: usize) -> usize {
        if width == 0 {
            return 0;
        }
        // Walk back from the cursor until the columns run out, keeping
        // one column for the cursor block itself.
        let chars: Vec<char> = self.content.chars().take(self.cursor).collect();
        let mut used = 1;
        let mut start = chars.len();
        while start > 0 {
            let w = chars[start - 1].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }
        start
    }

    /// Render inside a bordered block. A disabled box shows `placeholder`
    /// dimmed instead of the cursor.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        enabled: bool,
        placeholder: &str,
    ) {
        let border = if enabled { Color::Yellow } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if !enabled || self.content.is_empty() {
            let style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC);
            buf.set_stringn(inner.x, inner.y, placeholder, inner.width as usize, style);
            if !enabled {
                return;
            }
        }

        let width = inner.width as usize;
        let offset = self.scroll_offset(width);
        let mut x = inner.x;
        let right = inner.x + inner.width;
        for (idx, c) in self.content.chars().enumerate().skip(offset) {
            let w = c.width().unwrap_or(0) as u16;
            if x + w > right {
                break;
            }
            let style = if idx == self.cursor {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            buf.set_string(x, inner.y, c.to_string(), style);
            x += w;
        }

        if self.cursor == self.char_count() && x < right {
            buf.set_string(x, inner.y, " ", Style::default().bg(Color::Yellow));
        }
    }
}

/// [`Widget`] adapter for [`InputBox`].
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    enabled: bool,
    placeholder: &'a str,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, enabled: bool) -> Self {
        Self {
            input_box,
            title,
            enabled,
            placeholder: "",
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.enabled, self.placeholder);
    }
}
