use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

/// Split `"Label: keys | Label: keys"` into styled spans
fn footer_spans(text: &str) -> Vec<Span<'_>> {
    let t = theme();
    let mut spans = Vec::new();

    for (i, part) in text.split(" | ").enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", t.muted_style()));
        }

        // Split on ": " to separate label from keys
        if let Some((label, keys)) = part.split_once(": ") {
            spans.push(Span::styled(format!("{}: ", label), t.title_style()));
            spans.push(Span::styled(
                keys,
                t.text_style().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(part, t.text_style()));
        }
    }

    spans
}

impl Footer {
    /// Render a footer with the given key hints
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_focused_style())
            .border_type(BorderType::Rounded)
            .style(t.background_style());

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Line::from(footer_spans(text))).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_spans_split_label_and_keys() {
        let spans = footer_spans("Sign in: Enter | Quit: Esc");
        let text: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, vec!["Sign in: ", "Enter", " | ", "Quit: ", "Esc"]);
    }

    #[test]
    fn test_footer_spans_plain_text() {
        let spans = footer_spans("Signed in");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Signed in");
    }
}
