use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Create the standard screen layout: header, content, footer.
///
/// Returns `[header, content, footer]`.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Center a popup sized as a percentage of the given area.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0]);
    horizontal[0]
}

/// Center a box of fixed size, shrinking it to fit small terminals.
pub fn center_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Whether a terminal cell lies inside a rectangle.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        let centered = center_fixed(area, 50, 20);
        assert_eq!(centered, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_center_fixed_shrinks_to_fit() {
        let area = Rect::new(0, 0, 30, 10);
        let centered = center_fixed(area, 50, 20);
        assert_eq!(centered, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(5, 5, 10, 3);
        assert!(contains(rect, 5, 5));
        assert!(contains(rect, 14, 7));
        assert!(!contains(rect, 15, 7));
        assert!(!contains(rect, 4, 5));
    }

    #[test]
    fn test_standard_layout_heights() {
        let [header, content, footer] = create_standard_layout(Rect::new(0, 0, 80, 24), 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 19);
    }
}
