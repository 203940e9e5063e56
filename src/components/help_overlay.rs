//! Help Overlay Component
//!
//! Lists the active keybindings on top of the form.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Build the binding list, grouped by action category
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = vec![Line::from("")];

        let mut current_category = "";
        for binding in keymap.all_bindings() {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {} ", category),
                    t.title_style(),
                )));
                current_category = category;
            }

            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {:14}", binding.display()),
                    t.text_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled(binding.get_description().to_string(), t.muted_style()),
            ]));
        }

        lines
    }

    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 70, 80);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style())
            .style(t.background_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [bindings_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(inner_area);

        let bindings = Paragraph::new(Self::binding_lines(keymap))
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);
        frame.render_widget(bindings, bindings_area);

        let footer = Paragraph::new("Press any key to close")
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);

        Ok(())
    }
}
