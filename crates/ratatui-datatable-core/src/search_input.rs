use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::render;
use crate::viewport::ViewportState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

#[derive(Clone, Debug)]
pub struct SearchInputOptions {
    pub placeholder: String,
    pub style: Style,
    pub placeholder_style: Style,
}

impl Default for SearchInputOptions {
    fn default() -> Self {
        Self {
            placeholder: "Search...".to_string(),
            style: Style::default(),
            placeholder_style: Style::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchInputAction {
    None,
    Changed,
    /// `Enter`: keep the text, leave the input.
    Submitted,
    /// `Esc`: the text was cleared.
    Cancelled,
}

/// A single-line text input with a horizontally scrolling cursor.
#[derive(Clone, Debug, Default)]
pub struct SearchInput {
    text: String,
    cursor: usize, // char index
    pub state: ViewportState,
    options: SearchInputOptions,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchInputOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = single_line(&text.into());
        self.cursor = self.text.chars().count();
        self.recompute_content_size();
        self.ensure_cursor_visible();
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    pub fn input(&mut self, event: InputEvent) -> SearchInputAction {
        match event {
            InputEvent::Paste(s) => {
                let s = single_line(&s);
                if s.is_empty() {
                    return SearchInputAction::None;
                }
                for ch in s.chars() {
                    self.insert_char(ch);
                }
                self.changed()
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(_) => SearchInputAction::None,
        }
    }

    /// Screen position of the cursor inside `area`, for `Frame::set_cursor_position`.
    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let x = (self.cursor_display_x() as u32).saturating_sub(self.state.x);
        if x >= area.width as u32 {
            return None;
        }
        Some((area.x + x as u16, area.y))
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.state.set_viewport(area.width, 1);
        self.recompute_content_size();
        self.ensure_cursor_visible();

        let line = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(line, self.options.style);
        if self.text.is_empty() {
            render::render_str_clipped(
                area.x,
                area.y,
                0,
                area.width,
                buf,
                &self.options.placeholder,
                self.options.style.patch(self.options.placeholder_style),
            );
            return;
        }
        render::render_str_clipped(
            area.x,
            area.y,
            self.state.x,
            area.width,
            buf,
            &self.text,
            self.options.style,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> SearchInputAction {
        match key.code {
            KeyCode::Char(c) => {
                if !key.modifiers.is_plain() {
                    return SearchInputAction::None;
                }
                self.insert_char(c);
                self.changed()
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return SearchInputAction::None;
                }
                self.remove_char_at(self.cursor - 1);
                self.cursor -= 1;
                self.changed()
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_len() {
                    return SearchInputAction::None;
                }
                self.remove_char_at(self.cursor);
                self.changed()
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                self.ensure_cursor_visible();
                SearchInputAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                self.ensure_cursor_visible();
                SearchInputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                self.ensure_cursor_visible();
                SearchInputAction::None
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                self.ensure_cursor_visible();
                SearchInputAction::None
            }
            KeyCode::Enter => SearchInputAction::Submitted,
            KeyCode::Esc => {
                self.clear();
                SearchInputAction::Cancelled
            }
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown => SearchInputAction::None,
        }
    }

    fn changed(&mut self) -> SearchInputAction {
        self.recompute_content_size();
        self.ensure_cursor_visible();
        SearchInputAction::Changed
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn insert_char(&mut self, ch: char) {
        let byte_idx = byte_index_from_char_index(&self.text, self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    fn remove_char_at(&mut self, char_idx: usize) {
        let start = byte_index_from_char_index(&self.text, char_idx);
        let end = byte_index_from_char_index(&self.text, char_idx + 1);
        self.text.replace_range(start..end, "");
    }

    fn recompute_content_size(&mut self) {
        // One extra column so the cursor can sit after the last character.
        let w = render::str_width(&self.text) as u32 + 1;
        self.state.set_content(w, 1);
    }

    fn ensure_cursor_visible(&mut self) {
        self.state.ensure_visible_x(self.cursor_display_x() as u32);
    }

    fn cursor_display_x(&self) -> usize {
        self.text
            .chars()
            .take(self.cursor)
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }
}

fn byte_index_from_char_index(s: &str, char_idx: usize) -> usize {
    match s.char_indices().nth(char_idx) {
        Some((i, _)) => i,
        None => s.len(),
    }
}

fn single_line(s: &str) -> String {
    s.trim_end_matches(['\n', '\r'])
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyModifiers;

    fn type_str(input: &mut SearchInput, s: &str) {
        for c in s.chars() {
            input.input(InputEvent::char(c));
        }
    }

    #[test]
    fn inserts_and_moves_cursor() {
        let mut si = SearchInput::new();
        assert_eq!(si.input(InputEvent::char('a')), SearchInputAction::Changed);
        assert_eq!(si.text(), "a");
        assert_eq!(si.cursor(), 1);
        si.input(InputEvent::key(KeyCode::Left));
        assert_eq!(si.cursor(), 0);
        si.input(InputEvent::char('b'));
        assert_eq!(si.text(), "ba");
    }

    #[test]
    fn backspace_and_delete() {
        let mut si = SearchInput::new();
        type_str(&mut si, "jane");
        assert_eq!(
            si.input(InputEvent::key(KeyCode::Backspace)),
            SearchInputAction::Changed
        );
        assert_eq!(si.text(), "jan");
        si.input(InputEvent::key(KeyCode::Home));
        si.input(InputEvent::key(KeyCode::Delete));
        assert_eq!(si.text(), "an");
        assert_eq!(
            si.input(InputEvent::key(KeyCode::Backspace)),
            SearchInputAction::None
        );
    }

    #[test]
    fn ctrl_chars_are_ignored() {
        let mut si = SearchInput::new();
        let key = KeyEvent::new(KeyCode::Char('f')).with_modifiers(KeyModifiers::ctrl());
        assert_eq!(si.input(InputEvent::Key(key)), SearchInputAction::None);
        assert!(si.is_empty());
    }

    #[test]
    fn esc_clears_and_enter_submits() {
        let mut si = SearchInput::new();
        type_str(&mut si, "bob");
        assert_eq!(
            si.input(InputEvent::key(KeyCode::Enter)),
            SearchInputAction::Submitted
        );
        assert_eq!(si.text(), "bob");
        assert_eq!(
            si.input(InputEvent::key(KeyCode::Esc)),
            SearchInputAction::Cancelled
        );
        assert!(si.is_empty());
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut si = SearchInput::new();
        si.input(InputEvent::Paste("a\nb\n".to_string()));
        assert_eq!(si.text(), "a b");
        assert_eq!(si.cursor(), 3);
    }

    #[test]
    fn long_text_scrolls_to_cursor() {
        let mut si = SearchInput::new();
        type_str(&mut si, "abcdefghij");
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        si.render_ref(Rect::new(0, 0, 4, 1), &mut buf);
        assert_eq!(si.state.x, 7);
        assert_eq!(si.cursor_pos(Rect::new(0, 0, 4, 1)), Some((3, 0)));
        let text: String = (0..4u16).map(|x| buf[(x, 0u16)].symbol().to_string()).collect();
        assert_eq!(text, "hij ");
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut si = SearchInput::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        si.render_ref(Rect::new(0, 0, 12, 1), &mut buf);
        let text: String = (0..12u16).map(|x| buf[(x, 0u16)].symbol().to_string()).collect();
        assert_eq!(text.trim_end(), "Search...");
    }
}
