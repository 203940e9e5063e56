use crate::keymap::Action;
use crossterm::event::KeyCode;

/// A text input field with encapsulated state.
///
/// This struct wraps the text and cursor position, providing a cleaner API
/// for managing text input in forms and screens. The cursor is counted in
/// characters, not bytes.
///
/// # Example
/// ```
/// use signin::utils::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
    /// First character shown when the text is wider than its box
    scroll: usize,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            scroll: 0,
        }
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible character.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn set_scroll(&mut self, scroll: usize) {
        self.scroll = scroll.min(self.len());
    }

    /// Get the trimmed text.
    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of characters in the input.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Set the text and move cursor to end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Clear the text and reset cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        handle_char_insertion(&mut self.text, &mut self.cursor, c);
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        handle_backspace(&mut self.text, &mut self.cursor);
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        handle_delete(&mut self.text, &mut self.cursor);
    }

    /// Move the cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Place the cursor at a character column, clamped to the text length.
    pub fn set_cursor(&mut self, column: usize) {
        self.cursor = column.min(self.len());
    }

    /// Handle a raw key code.
    ///
    /// Returns true if the key was handled.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Handle an action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            Action::ClearField => self.clear(),
            _ => return false,
        }
        true
    }
}

/// Insert a single character at the cursor. Control characters are ignored.
fn handle_char_insertion(text: &mut String, cursor_pos: &mut usize, c: char) {
    if c.is_control() {
        return;
    }
    let byte_index = text
        .char_indices()
        .map(|(i, _)| i)
        .nth(*cursor_pos)
        .unwrap_or(text.len());
    text.insert(byte_index, c);
    *cursor_pos = (*cursor_pos + 1).min(text.chars().count());
}

/// Delete the character before the cursor
fn handle_backspace(text: &mut String, cursor_pos: &mut usize) {
    if *cursor_pos > 0 {
        let before_cursor = text.chars().take(*cursor_pos - 1);
        let after_cursor = text.chars().skip(*cursor_pos);
        *text = before_cursor.chain(after_cursor).collect();
        *cursor_pos -= 1;
    }
}

/// Delete the character at the cursor
fn handle_delete(text: &mut String, cursor_pos: &mut usize) {
    if *cursor_pos < text.chars().count() {
        let before_cursor = text.chars().take(*cursor_pos);
        let after_cursor = text.chars().skip(*cursor_pos + 1);
        *text = before_cursor.chain(after_cursor).collect();
    }
}
