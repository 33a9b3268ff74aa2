//! Editable single-line text used by every form field.

/// Upper bound on characters per field; long file URLs fit comfortably.
const MAX_FIELD_LENGTH: usize = 2048;

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldInputState {
    text: String,
    /// Character index, not byte index.
    cursor: usize,
}

impl FieldInputState {
    /// Field pre-filled with `text`, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        let mut state = Self::default();
        for ch in text.chars() {
            if !state.insert_char(ch) {
                break;
            }
        }
        state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text as shown on screen; masked fields show one bullet per character.
    pub fn display_text(&self, masked: bool) -> String {
        if masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.text.chars().count())
                .collect()
        } else {
            self.text.clone()
        }
    }

    /// Returns false when the field is full.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_FIELD_LENGTH {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.remove_at_cursor();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(byte_idx, _)| byte_idx)
    }
}
