//! Text input widget for rendering TextInput instances.
//!
//! Renders a bordered, titled input with placeholder text, password masking,
//! an optional right-aligned suffix (used for the show/hide password
//! indicator) and cursor placement when focused. Text wider than the box
//! scrolls horizontally so the cursor cell stays visible.

use crate::utils::text_input::TextInput;
use crate::utils::{
    disabled_border_style, disabled_text_style, focused_border_style, input_placeholder_style,
    input_text_style, unfocused_border_style,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

/// Character used to mask hidden text
pub const MASK_CHAR: char = '•';

/// Visible slice of a single-line input
#[derive(Debug, Clone, PartialEq, Eq)]
struct Window {
    /// Index of the first visible character
    start: usize,
    text: String,
    /// Cursor offset in cells from the left edge
    cursor_column: u16,
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Slide a `width`-cell window over `text` so the cell after `cursor`
/// (a character index) is inside it. The window starts at `anchor` when
/// that already shows the cursor.
fn window(text: &str, cursor: usize, anchor: usize, width: u16) -> Window {
    let chars: Vec<char> = text.chars().collect();
    let width = width as usize;
    let cursor = cursor.min(chars.len());

    let mut start = anchor.min(cursor);
    let mut before: usize = chars[start..cursor].iter().map(|&c| char_width(c)).sum();
    while start < cursor && before + 1 > width {
        before -= char_width(chars[start]);
        start += 1;
    }

    let mut used = 0;
    let mut visible = String::new();
    for &c in &chars[start..] {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        used += w;
        visible.push(c);
    }

    Window {
        start,
        text: visible,
        cursor_column: before.min(width.saturating_sub(1)) as u16,
    }
}

/// A widget for rendering TextInput with consistent styling.
///
/// # Example
/// ```
/// use signin::widgets::TextInputWidget;
/// use signin::utils::TextInput;
///
/// let input = TextInput::with_text("hunter2");
/// let widget = TextInputWidget::new(&input)
///     .title("Password")
///     .masked(true)
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    suffix: Option<Span<'a>>,
    focused: bool,
    disabled: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    /// Create a new text input widget.
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            suffix: None,
            focused: false,
            disabled: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Right-aligned decoration drawn inside the border.
    pub fn suffix(mut self, suffix: impl Into<Span<'a>>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether to mask the text (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Get the display text (actual text, masked text, or placeholder).
    fn display_text(&self) -> String {
        let text = self.input.text();

        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            MASK_CHAR.to_string().repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        if self.disabled {
            disabled_text_style()
        } else if self.input.text().is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            disabled_border_style()
        } else if self.focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }

        block
    }

    /// Split the inner area into the text column and the suffix column.
    fn inner_areas(&self, area: Rect) -> (Rect, Option<Rect>) {
        let inner = self.create_block().inner(area);
        match &self.suffix {
            Some(suffix) => {
                let suffix_width = (suffix.width() as u16).min(inner.width);
                let [text, suffix] = Layout::horizontal([
                    Constraint::Min(0),
                    Constraint::Length(suffix_width),
                ])
                .areas(inner);
                (text, Some(suffix))
            }
            None => (inner, None),
        }
    }

    /// Area occupied by the suffix, used for mouse hit testing.
    pub fn suffix_area(&self, area: Rect) -> Option<Rect> {
        self.inner_areas(area).1
    }

    fn visible_window(&self, text_area: Rect) -> Window {
        if self.input.text().is_empty() {
            return window(&self.display_text(), 0, 0, text_area.width);
        }
        window(
            &self.display_text(),
            self.input.cursor(),
            self.input.scroll(),
            text_area.width,
        )
    }

    /// First visible character for this area; store it back with
    /// [`TextInput::set_scroll`] after rendering so the view stays put.
    pub fn scroll_offset(&self, area: Rect) -> usize {
        let (text_area, _) = self.inner_areas(area);
        self.visible_window(text_area).start
    }

    /// Cursor cell for a given widget area, if the cursor should be shown.
    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled {
            return None;
        }
        let (text_area, _) = self.inner_areas(area);
        let view = self.visible_window(text_area);
        Some(Position::new(text_area.x + view.cursor_column, text_area.y))
    }

    /// Character index a click on terminal `column` should move the cursor to.
    pub fn cursor_at_column(&self, area: Rect, column: u16) -> usize {
        if self.input.text().is_empty() {
            return 0;
        }
        let (text_area, _) = self.inner_areas(area);
        let view = self.visible_window(text_area);
        let target = column.saturating_sub(text_area.x) as usize;

        let mut offset = 0;
        let mut cells = 0;
        for c in view.text.chars() {
            let w = char_width(c);
            if cells + w > target {
                break;
            }
            cells += w;
            offset += 1;
        }
        (view.start + offset).min(self.input.len())
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        let (text_area, suffix_area) = self.inner_areas(area);

        block.render(area, buf);
        Paragraph::new(self.visible_window(text_area).text)
            .style(self.text_style())
            .render(text_area, buf);

        if let (Some(suffix), Some(suffix_area)) = (self.suffix, suffix_area) {
            Paragraph::new(Line::from(suffix))
                .alignment(Alignment::Right)
                .render(suffix_area, buf);
        }
    }
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
///
/// Since the Widget trait doesn't have access to Frame, we need this extension
/// to properly set the cursor position.
pub trait TextInputWidgetExt {
    /// Render a TextInputWidget and set cursor position if focused.
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
